//! Request description for the Open-Meteo forecast endpoint.

use crate::types::location::LatLon;
use bon::bon;

/// Public Open-Meteo forecast endpoint.
pub const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Hourly variables requested from the API, in the order the daily rollup
/// expects them.
pub const HOURLY_VARIABLES: [&str; 4] = ["temperature_2m", "rain", "showers", "visibility"];

const DEFAULT_PAST_DAYS: u32 = 31;

/// One hourly-forecast request: a location plus how many past days of
/// history to include alongside the current day.
///
/// # Examples
///
/// ```
/// use meteopipe::{ForecastRequest, LatLon};
///
/// let request = ForecastRequest::builder()
///     .location(LatLon(51.5085, -0.1257))
///     .build();
/// assert!(request.url().contains("past_days=31"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    location: LatLon,
    past_days: u32,
    api_url: String,
}

#[bon]
impl ForecastRequest {
    /// Builds a request.
    ///
    /// * `.location(LatLon)`: **Required.** Coordinates to fetch the forecast for.
    /// * `.past_days(u32)`: Optional. Days of history before today. Defaults to `31`.
    /// * `.api_url(String)`: Optional. Endpoint override for self-hosted
    ///   API instances. Defaults to [`FORECAST_API_URL`].
    #[builder]
    pub fn new(location: LatLon, past_days: Option<u32>, api_url: Option<String>) -> Self {
        Self {
            location,
            past_days: past_days.unwrap_or(DEFAULT_PAST_DAYS),
            api_url: api_url.unwrap_or_else(|| FORECAST_API_URL.to_string()),
        }
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn past_days(&self) -> u32 {
        self.past_days
    }

    /// Renders the full request URL including query parameters.
    pub fn url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&past_days={}",
            self.api_url,
            self.location.0,
            self.location.1,
            HOURLY_VARIABLES.join(","),
            self.past_days
        )
    }
}
