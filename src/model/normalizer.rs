use std::collections::{
    BTreeMap,
    BTreeSet
};

use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::malformedrecorderror::MalformedRecordError;
use crate::locale::localeresolver::HolidayText;
use crate::locale::translationcatalog::CatalogSet;
use crate::source::datasource::DataOrigin;
use crate::source::rawpayload::{
    RawEvent,
    RawSourcePayload
};

use super::dataset::Dataset;
use super::division::Division;
use super::holiday::HolidayRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

struct ParsedEvent {
    date: NaiveDate,
    text: HolidayText,
    bunting: bool
}

fn parse_event(division: Division, event: &RawEvent) -> Result<ParsedEvent, MalformedRecordError> {
    let date = NaiveDate::parse_from_str(event.date.trim(), DATE_FORMAT)
        .map_err(|error| MalformedRecordError::new(division, &event.date, error.to_string()))?;
    let title = event.title.trim();
    if title.is_empty() {
        return Err(MalformedRecordError::new(division, &event.date, "missing title"));
    }
    let notes = event.notes.as_deref().unwrap_or_default().trim();
    Ok(ParsedEvent {
        date,
        text: HolidayText::new(title, notes),
        bunting: event.bunting.unwrap_or(false)
    })
}

/// Parses each record of a bucket, skipping the ones that cannot be read,
/// and returns them sorted with one record per date.
fn parse_bucket(division: Division, events: &[RawEvent]) -> Vec<ParsedEvent> {
    let mut parsed: Vec<ParsedEvent> = events
        .iter()
        .filter_map(|event| match parse_event(division, event) {
            Ok(parsed_event) => Some(parsed_event),
            Err(error) => {
                warn!("{}", error);
                debug!("{:?}", event);
                None
            }
        })
        .collect();

    parsed.sort_by_key(|event| event.date);
    parsed.dedup_by(|later, earlier| {
        let duplicated = later.date == earlier.date;
        if duplicated {
            warn!("duplicate {} holiday on {}; keeping '{}'", division, later.date, earlier.text.title);
        }
        duplicated
    });
    parsed
}

/// Turns a raw payload into a `Dataset`.
pub struct Normalizer {
    catalogs: CatalogSet
}

impl Normalizer {
    pub fn new(catalogs: CatalogSet) -> Normalizer {
        Normalizer { catalogs }
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Keeps only `division_filter` when given, otherwise every known
    /// division in the payload. Unknown buckets are skipped.
    pub fn normalize(&self,
                     payload: &RawSourcePayload,
                     origin: DataOrigin,
                     division_filter: Option<Division>) -> Dataset {
        let mut parsed: BTreeMap<Division, Vec<ParsedEvent>> = BTreeMap::new();
        for (key, bucket) in payload.divisions() {
            let Ok(division) = Division::from_key(key) else {
                warn!("ignoring unknown division '{}'", key);
                continue;
            };
            if division_filter.is_some_and(|wanted| wanted != division) {
                continue;
            }
            parsed.insert(division, parse_bucket(division, &bucket.events));
        }

        // A holiday belongs to every bucket that lists the same date and title.
        let mut membership: BTreeMap<(NaiveDate, &str), BTreeSet<Division>> = BTreeMap::new();
        for (division, events) in parsed.iter() {
            for event in events {
                membership
                    .entry((event.date, event.text.title.as_str()))
                    .or_default()
                    .insert(*division);
            }
        }

        let divisions: BTreeMap<Division, Vec<HolidayRecord>> = parsed
            .iter()
            .map(|(division, events)| {
                let records = events
                    .iter()
                    .map(|event| {
                        let tags = membership
                            .get(&(event.date, event.text.title.as_str()))
                            .cloned()
                            .unwrap_or_else(|| BTreeSet::from([*division]));
                        HolidayRecord::new(
                            event.date,
                            self.catalogs.localize(event.text.clone()),
                            event.bunting,
                            tags
                        )
                    })
                    .collect();
                (*division, records)
            })
            .collect();

        Dataset::new(divisions, origin)
    }
}
