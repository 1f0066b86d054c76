use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Forecast request to {url} returned status {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Failed to decode JSON body from {url}")]
    BodyDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to re-encode forecast body")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write forecast file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),
}
