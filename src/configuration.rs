use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::holidayerror::HolidayError;
use crate::locale::locale::Locale;

pub const DEFAULT_SOURCE_URL: &str = "https://www.gov.uk/bank-holidays.json";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Engine settings. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    locale: Locale,
    use_cached_holidays: bool,
    eager_load: bool,
    fetch_timeout_ms: u64,
    source_url: String
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            locale: Locale::DEFAULT,
            use_cached_holidays: false,
            eager_load: false,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            source_url: DEFAULT_SOURCE_URL.to_owned()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Configuration {
        self.locale = locale;
        self
    }

    /// Skip the network and answer from the bundled snapshot.
    pub fn with_use_cached_holidays(mut self, use_cached_holidays: bool) -> Configuration {
        self.use_cached_holidays = use_cached_holidays;
        self
    }

    /// Build the dataset while constructing the engine instead of on first use.
    pub fn with_eager_load(mut self, eager_load: bool) -> Configuration {
        self.eager_load = eager_load;
        self
    }

    /// Kept in whole milliseconds; a sub-millisecond remainder rounds up.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Configuration {
        let remainder = u64::from(timeout.subsec_nanos() % 1_000_000 != 0);
        self.fetch_timeout_ms = u64::try_from(timeout.as_millis())
            .unwrap_or(u64::MAX)
            .saturating_add(remainder);
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Configuration {
        self.source_url = source_url.into();
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn use_cached_holidays(&self) -> bool {
        self.use_cached_holidays
    }

    pub fn eager_load(&self) -> bool {
        self.eager_load
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn validate(&self) -> Result<(), HolidayError> {
        if self.fetch_timeout_ms == 0 {
            return Err(HolidayError::InvalidArgument(
                "fetch timeout must be positive".to_owned()
            ));
        }
        if self.source_url.trim().is_empty() {
            return Err(HolidayError::InvalidArgument("source url must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Configuration, HolidayError> {
        let json_value: serde_json::Value = serde_json::from_str(text)?;
        let configuration: Configuration = HolidayError::parse_json_value(json_value)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, HolidayError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration: Configuration = HolidayError::parse_json_value(json_value)?;
        configuration.validate()?;
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let configuration = Configuration::from_json_str("{}").unwrap();
        assert_eq!(configuration, Configuration::new());
        assert_eq!(configuration.source_url(), DEFAULT_SOURCE_URL);
        assert_eq!(configuration.fetch_timeout(), Duration::from_secs(10));
        assert!(!configuration.use_cached_holidays());
    }

    #[test]
    fn reads_every_field() {
        let configuration = Configuration::from_json_str(r#"{
            "locale": "cy",
            "use_cached_holidays": true,
            "eager_load": true,
            "fetch_timeout_ms": 3000,
            "source_url": "http://localhost:8080/bank-holidays.json"
        }"#).unwrap();
        assert_eq!(configuration.locale(), Locale::Welsh);
        assert!(configuration.use_cached_holidays());
        assert!(configuration.eager_load());
        assert_eq!(configuration.fetch_timeout(), Duration::from_secs(3));
        assert_eq!(configuration.source_url(), "http://localhost:8080/bank-holidays.json");
    }

    #[test]
    fn accepts_regional_locale_tags() {
        let configuration = Configuration::from_json_str(r#"{"locale": "cy-GB"}"#).unwrap();
        assert_eq!(configuration.locale(), Locale::Welsh);
    }

    #[test]
    fn rejects_unknown_locale() {
        let error = Configuration::from_json_str(r#"{"locale": "fr"}"#).unwrap_err();
        assert!(matches!(error, HolidayError::JsonParse(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let error = Configuration::new()
            .with_fetch_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(error, HolidayError::InvalidArgument(_)));

        let error = Configuration::from_json_str(r#"{"fetch_timeout_ms": 0}"#).unwrap_err();
        assert!(matches!(error, HolidayError::InvalidArgument(_)));
    }

    #[test]
    fn keeps_sub_second_timeouts() {
        let configuration = Configuration::new().with_fetch_timeout(Duration::from_millis(1500));
        assert_eq!(configuration.fetch_timeout(), Duration::from_millis(1500));

        let json = serde_json::to_string(&configuration).unwrap();
        assert_eq!(Configuration::from_json_str(&json).unwrap(), configuration);

        let short = Configuration::new().with_fetch_timeout(Duration::from_millis(500));
        assert!(short.validate().is_ok());
        assert_eq!(short.fetch_timeout(), Duration::from_millis(500));

        let tiny = Configuration::new().with_fetch_timeout(Duration::from_micros(10));
        assert_eq!(tiny.fetch_timeout(), Duration::from_millis(1));
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = Configuration::from_reader("/nonexistent/bank-holidays-config.json").unwrap_err();
        assert!(matches!(error, HolidayError::Io(_)));
    }
}
