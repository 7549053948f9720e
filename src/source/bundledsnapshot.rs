use std::borrow::Cow;

use crate::error::holidayerror::HolidayError;

use super::rawpayload::RawSourcePayload;

const BUNDLED_SNAPSHOT: &str = include_str!("../../data/bank-holidays.json");

/// The holiday document compiled into the crate.
///
/// It only covers the years published when it was last regenerated, so it
/// goes stale; that is accepted. It is the last line of fallback, so a
/// snapshot that fails to parse or validate is a hard error.
#[derive(Debug, Clone)]
pub struct BundledSnapshot {
    json: Cow<'static, str>
}

impl BundledSnapshot {
    pub fn bundled() -> BundledSnapshot {
        BundledSnapshot { json: Cow::Borrowed(BUNDLED_SNAPSHOT) }
    }

    /// A replacement snapshot, e.g. a locally regenerated document.
    pub fn from_json(json: impl Into<String>) -> BundledSnapshot {
        BundledSnapshot { json: Cow::Owned(json.into()) }
    }

    pub fn load(&self) -> Result<RawSourcePayload, HolidayError> {
        let payload = RawSourcePayload::from_json_str(&self.json)
            .map_err(|error| HolidayError::SnapshotUnavailable(error.to_string()))?;
        payload
            .validate()
            .map_err(|error| HolidayError::SnapshotUnavailable(error.to_string()))?;
        Ok(payload)
    }
}

impl Default for BundledSnapshot {
    fn default() -> Self {
        BundledSnapshot::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::division::Division;

    #[test]
    fn bundled_snapshot_is_usable() {
        let payload = BundledSnapshot::bundled().load().unwrap();
        assert!(payload.missing_divisions().is_empty());
        assert!(payload.unexpected_divisions().is_empty());
        assert_eq!(payload.divisions()[Division::EnglandAndWales.key()].events.len(), 83);
    }

    #[test]
    fn unparsable_snapshot_is_fatal() {
        let error = BundledSnapshot::from_json("{ not json").load().unwrap_err();
        assert!(matches!(error, HolidayError::SnapshotUnavailable(_)));
    }

    #[test]
    fn incomplete_snapshot_is_fatal() {
        let error = BundledSnapshot::from_json(r#"{"scotland": {"division": "scotland", "events": []}}"#)
            .load()
            .unwrap_err();
        assert!(matches!(error, HolidayError::SnapshotUnavailable(_)));
    }
}
