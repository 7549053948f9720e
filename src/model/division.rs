use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::holidayerror::HolidayError;

/// A UK jurisdiction with its own bank-holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "england-and-wales")]
    EnglandAndWales,
    #[serde(rename = "scotland")]
    Scotland,
    #[serde(rename = "northern-ireland")]
    NorthernIreland
}

impl Division {
    pub const ALL: [Division; 3] = [
        Division::EnglandAndWales,
        Division::Scotland,
        Division::NorthernIreland
    ];

    /// Bucket key used by the upstream JSON document.
    pub fn key(&self) -> &'static str {
        match self {
            Division::EnglandAndWales => "england-and-wales",
            Division::Scotland => "scotland",
            Division::NorthernIreland => "northern-ireland"
        }
    }

    /// English display name, also the catalog message for localisation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Division::EnglandAndWales => "England and Wales",
            Division::Scotland => "Scotland",
            Division::NorthernIreland => "Northern Ireland"
        }
    }

    /// Accepts either the bucket key or the display name, ignoring case.
    pub fn from_key(key: &str) -> Result<Division, HolidayError> {
        let trimmed = key.trim();
        Division::ALL
            .iter()
            .copied()
            .find(|division| {
                division.key().eq_ignore_ascii_case(trimmed) ||
                division.display_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| HolidayError::UnknownDivision(key.to_owned()))
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Division {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Division::from_key(s)
    }
}

/// Which holiday list a query runs against.
///
/// `Common` keeps only the dates that every division observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivisionFilter {
    #[default]
    Common,
    Only(Division)
}

impl DivisionFilter {
    pub fn division(&self) -> Option<Division> {
        match self {
            DivisionFilter::Common => None,
            DivisionFilter::Only(division) => Some(*division)
        }
    }
}

impl From<Division> for DivisionFilter {
    fn from(division: Division) -> Self {
        DivisionFilter::Only(division)
    }
}

impl From<Option<Division>> for DivisionFilter {
    fn from(division: Option<Division>) -> Self {
        division.map_or(DivisionFilter::Common, DivisionFilter::Only)
    }
}

impl fmt::Display for DivisionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionFilter::Common => f.write_str("common"),
            DivisionFilter::Only(division) => division.fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_display_names() {
        assert_eq!(Division::from_key("scotland").unwrap(), Division::Scotland);
        assert_eq!(Division::from_key("England-And-Wales").unwrap(), Division::EnglandAndWales);
        assert_eq!("Northern Ireland".parse::<Division>().unwrap(), Division::NorthernIreland);
    }

    #[test]
    fn rejects_unknown_division() {
        let error = Division::from_key("wales").unwrap_err();
        assert!(matches!(error, HolidayError::UnknownDivision(key) if key == "wales"));
    }

    #[test]
    fn key_round_trips_through_serde() {
        let json = serde_json::to_string(&Division::NorthernIreland).unwrap();
        assert_eq!(json, "\"northern-ireland\"");
        for division in Division::ALL {
            assert_eq!(Division::from_key(division.key()).unwrap(), division);
        }
    }

    #[test]
    fn filter_defaults_to_common() {
        assert_eq!(DivisionFilter::default(), DivisionFilter::Common);
        assert_eq!(DivisionFilter::from(None), DivisionFilter::Common);
        assert_eq!(
            DivisionFilter::from(Division::Scotland).division(),
            Some(Division::Scotland)
        );
    }
}
