use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response body from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Unexpected stats payload: {0}")]
    StatsShape(String),

    #[error("Prediction for '{city}' failed: {message}")]
    Prediction { city: String, message: String },

    #[error("Invalid endpoint URL '{0}'")]
    InvalidUrl(String, #[source] url::ParseError),
}
