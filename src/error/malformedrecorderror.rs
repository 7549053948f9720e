use thiserror::Error;

use crate::model::division::Division;

/// A single event record that could not be turned into a holiday.
/// The normalizer logs and skips it; the rest of the load continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("skipped {division} holiday dated '{date}': {reason}")]
pub struct MalformedRecordError {
    pub division: Division,
    pub date: String,
    pub reason: String,
}

impl MalformedRecordError {
    pub fn new(division: Division, date: &str, reason: impl Into<String>) -> MalformedRecordError {
        MalformedRecordError {
            division,
            date: date.to_owned(),
            reason: reason.into(),
        }
    }
}
