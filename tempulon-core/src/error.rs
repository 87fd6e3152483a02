use thiserror::Error;

/// Failures of the remote lookups.
///
/// `NotFound` and `BlankCity` are expected outcomes of geocoding; every other
/// variant means the data was unavailable for this request.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no city given")]
    BlankCity,

    #[error("location not found: {0}")]
    NotFound(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound(_))
    }
}
