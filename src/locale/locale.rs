use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::holidayerror::HolidayError;

/// Serialized as its code; deserialized through `from_code`, so any tag
/// with a supported primary subtag is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "cy")]
    Welsh
}

impl Locale {
    /// Locale of the upstream text; every holiday carries it.
    pub const DEFAULT: Locale = Locale::English;

    pub const ALL: [Locale; 2] = [Locale::English, Locale::Welsh];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Welsh => "cy"
        }
    }

    /// Matches on the primary language subtag, so `cy-GB` and `en_GB` work.
    pub fn from_code(code: &str) -> Result<Locale, HolidayError> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
            .ok_or_else(|| HolidayError::UnknownLocale(code.to_owned()))
    }

    /// Locales to try, most specific first, ending with the default.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        if *self == Locale::DEFAULT {
            vec![Locale::DEFAULT]
        } else {
            vec![*self, Locale::DEFAULT]
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = HolidayError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Locale::from_code(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_code("cy").unwrap(), Locale::Welsh);
        assert_eq!(Locale::from_code("cy-GB").unwrap(), Locale::Welsh);
        assert_eq!(Locale::from_code("EN_gb").unwrap(), Locale::English);
    }

    #[test]
    fn rejects_unsupported_locale() {
        assert!(matches!(Locale::from_code("fr"), Err(HolidayError::UnknownLocale(_))));
        assert!(matches!(Locale::from_code(""), Err(HolidayError::UnknownLocale(_))));
    }

    #[test]
    fn deserializes_language_tags() {
        assert_eq!(serde_json::from_str::<Locale>(r#""cy-GB""#).unwrap(), Locale::Welsh);
        assert_eq!(serde_json::from_str::<Locale>(r#""EN_gb""#).unwrap(), Locale::English);
        assert!(serde_json::from_str::<Locale>(r#""fr""#).is_err());
        assert_eq!(serde_json::to_string(&Locale::Welsh).unwrap(), r#""cy""#);
    }

    #[test]
    fn fallback_chain_ends_with_default() {
        assert_eq!(Locale::Welsh.fallback_chain(), vec![Locale::Welsh, Locale::English]);
        assert_eq!(Locale::English.fallback_chain(), vec![Locale::English]);
    }
}
