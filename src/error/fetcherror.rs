use thiserror::Error;

/// Why a live fetch could not be used.
///
/// Never leaves `DataSource::load`: every variant is recovered by falling back
/// to the bundled snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected http status {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("response is not valid json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

impl FetchError {
    pub fn from_request(error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(error)
        }
    }

    pub fn from_body(error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Body(error)
        }
    }
}
