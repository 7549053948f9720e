use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::fetcherror::FetchError;
use crate::model::division::Division;

/// One event record exactly as the upstream document lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub bunting: Option<bool>
}

impl RawEvent {
    pub fn new(date: &str, title: &str) -> RawEvent {
        RawEvent {
            title: title.to_owned(),
            date: date.to_owned(),
            notes: None,
            bunting: None
        }
    }

    pub fn with_notes(mut self, notes: &str) -> RawEvent {
        self.notes = Some(notes.to_owned());
        self
    }

    pub fn with_bunting(mut self, bunting: bool) -> RawEvent {
        self.bunting = Some(bunting);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDivision {
    #[serde(default)]
    pub division: String,
    pub events: Vec<RawEvent>
}

/// Untyped division-key → events mapping, as fetched or bundled.
/// Discarded once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSourcePayload {
    divisions: BTreeMap<String, RawDivision>
}

impl RawSourcePayload {
    pub fn new() -> RawSourcePayload {
        RawSourcePayload::default()
    }

    pub fn from_json_str(text: &str) -> Result<RawSourcePayload, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    pub fn divisions(&self) -> &BTreeMap<String, RawDivision> {
        &self.divisions
    }

    pub fn insert(&mut self, key: &str, events: Vec<RawEvent>) {
        self.divisions.insert(
            key.to_owned(),
            RawDivision { division: key.to_owned(), events }
        );
    }

    pub fn with_division(mut self, division: Division, events: Vec<RawEvent>) -> RawSourcePayload {
        self.insert(division.key(), events);
        self
    }

    pub fn events(&self) -> impl Iterator<Item = &RawEvent> {
        self.divisions.values().flat_map(|bucket| bucket.events.iter())
    }

    pub fn event_count(&self) -> usize {
        self.divisions.values().map(|bucket| bucket.events.len()).sum()
    }

    pub fn missing_divisions(&self) -> Vec<Division> {
        Division::ALL
            .iter()
            .copied()
            .filter(|division| !self.divisions.contains_key(division.key()))
            .collect()
    }

    pub fn unexpected_divisions(&self) -> Vec<String> {
        self.divisions
            .keys()
            .filter(|key| Division::from_key(key).is_err())
            .cloned()
            .collect()
    }

    /// Checks the shape a usable payload must have: every known division
    /// present, and every record carrying a date and an English title.
    ///
    /// Dates are only checked for presence here; the normalizer parses them
    /// and skips individual records it cannot read.
    pub fn validate(&self) -> Result<(), FetchError> {
        let missing = self.missing_divisions();
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|division| division.key()).collect();
            return Err(FetchError::Shape(format!("missing divisions: {}", keys.join(", "))));
        }
        for (key, bucket) in self.divisions.iter() {
            let blank = bucket.events.iter().position(|event| {
                event.date.trim().is_empty() || event.title.trim().is_empty()
            });
            if let Some(index) = blank {
                return Err(FetchError::Shape(format!(
                    "event {} of '{}' has no date or title", index, key
                )));
            }
        }
        Ok(())
    }

    /// Merges a fresher payload into this one.
    ///
    /// Within each division, events from `latest` replace events on the same
    /// date; all other events are kept. Events end up ordered by date.
    pub fn merge(&mut self, latest: RawSourcePayload) {
        for (key, latest_bucket) in latest.divisions {
            let mut events_by_date: BTreeMap<String, RawEvent> = self.divisions
                .remove(&key)
                .map(|bucket| bucket.events)
                .unwrap_or_default()
                .into_iter()
                .map(|event| (event.date.clone(), event))
                .collect();
            for event in latest_bucket.events {
                events_by_date.insert(event.date.clone(), event);
            }
            self.insert(&key, events_by_date.into_values().collect());
        }
    }
}
