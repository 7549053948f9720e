use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::configuration::Configuration;
use crate::error::fetcherror::FetchError;

use super::rawpayload::RawSourcePayload;

/// Something that can produce a fresh payload, usually over the network.
pub trait HolidayFetcher: Send + Sync {
    fn fetch(&self) -> Result<RawSourcePayload, FetchError>;

    /// Used in log messages.
    fn name(&self) -> &str {
        "HolidayFetcher"
    }
}

/// Serves a fixed payload. Useful for tests and for callers that obtain the
/// document some other way.
#[derive(Debug, Clone)]
pub struct StaticHolidayFetcher {
    payload: RawSourcePayload
}

impl StaticHolidayFetcher {
    pub fn new(payload: RawSourcePayload) -> StaticHolidayFetcher {
        StaticHolidayFetcher { payload }
    }
}

impl HolidayFetcher for StaticHolidayFetcher {
    fn fetch(&self) -> Result<RawSourcePayload, FetchError> {
        Ok(self.payload.clone())
    }

    fn name(&self) -> &str {
        "StaticHolidayFetcher"
    }
}

/// One blocking GET against the published holiday document.
pub struct HttpHolidayFetcher {
    url: String,
    timeout: Duration
}

impl HttpHolidayFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> HttpHolidayFetcher {
        HttpHolidayFetcher { url: url.into(), timeout }
    }

    pub fn from_configuration(configuration: &Configuration) -> HttpHolidayFetcher {
        HttpHolidayFetcher::new(configuration.source_url(), configuration.fetch_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl HolidayFetcher for HttpHolidayFetcher {
    fn fetch(&self) -> Result<RawSourcePayload, FetchError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(FetchError::Client)?;
        let response = client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(FetchError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().map_err(FetchError::from_body)?;
        Ok(RawSourcePayload::from_json_str(&body)?)
    }

    fn name(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_fetcher_follows_configuration() {
        let configuration = Configuration::new()
            .with_source_url("http://localhost:8080/bank-holidays.json")
            .with_fetch_timeout(Duration::from_millis(2500));
        let fetcher = HttpHolidayFetcher::from_configuration(&configuration);
        assert_eq!(fetcher.url(), "http://localhost:8080/bank-holidays.json");
        assert_eq!(fetcher.timeout(), Duration::from_millis(2500));
        assert_eq!(fetcher.name(), fetcher.url());
    }

    #[test]
    fn static_fetcher_serves_its_payload() {
        let payload = RawSourcePayload::new();
        let fetcher = StaticHolidayFetcher::new(payload.clone());
        assert_eq!(fetcher.fetch().unwrap(), payload);
    }
}
