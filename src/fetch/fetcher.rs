use crate::fetch::error::FetchError;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::path::Path;

/// Downloads one hourly forecast and persists the raw JSON body to disk.
pub struct ForecastFetcher {
    client: Client,
}

impl ForecastFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Performs a single GET against `url` and writes the JSON body to
    /// `destination`, overwriting any existing file.
    ///
    /// Only status 200 counts as success. On any other status, or on a
    /// transport/decode/write failure, the destination file is left
    /// untouched and the corresponding [`FetchError`] is returned.
    pub async fn fetch_to_file(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        info!("Requesting hourly forecast from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Forecast request to {} failed with status {}", url, status);
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        // Decode and re-encode so the file holds exactly one valid JSON document.
        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| FetchError::BodyDecode {
                    url: url.to_string(),
                    source: e,
                })?;
        let bytes = serde_json::to_vec(&body)?;

        tokio::fs::write(destination, &bytes)
            .await
            .map_err(|e| FetchError::FileWrite(destination.to_path_buf(), e))?;

        info!(
            "Wrote {} bytes of forecast data to {:?}",
            bytes.len(),
            destination
        );
        Ok(())
    }
}

impl Default for ForecastFetcher {
    fn default() -> Self {
        Self::new()
    }
}
