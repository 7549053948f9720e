use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::model::division::Division;

/// Errors surfaced to callers of the engine.
///
/// Data-availability problems never show up here: a failed live fetch falls
/// back to the bundled snapshot and a malformed record is skipped. Only
/// programmer errors and a broken bundled artifact reach the caller.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown division '{0}'")]
    UnknownDivision(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("division '{0}' is not part of the loaded dataset")]
    DivisionNotLoaded(Division),

    #[error("bundled holiday data is unusable: {0}")]
    SnapshotUnavailable(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
}

impl HolidayError {
    pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, HolidayError>
    where
        T: for<'a> Deserialize<'a>,
    {
        serde_json::from_value(json_value).map_err(HolidayError::JsonParse)
    }

    pub fn negative_count(count: i32) -> HolidayError {
        HolidayError::InvalidArgument(format!("count must not be negative, got {}", count))
    }
}
