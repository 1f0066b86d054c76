//! Typed records for the Open-Meteo `/v1/forecast` response.
//!
//! The raw payload carries scalar metadata next to a `hourly` object of
//! index-aligned parallel arrays: position `i` across all quantity arrays
//! describes the same hour. Field names mirror the API so the structs
//! deserialize straight from the persisted response file.

use crate::transform::error::TransformError;
use serde::{Deserialize, Serialize};

/// One deserialized `/v1/forecast` response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i32,
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: Option<String>,
    pub hourly_units: HourlyUnits,
    pub hourly: HourlySeries,
}

impl ForecastResponse {
    /// Projects the scalar metadata and unit strings out of the response.
    ///
    /// These values are constant across all hourly rows of a
    /// single-location fetch, so they are lifted once instead of being
    /// duplicated into the row data.
    pub fn meta(&self) -> ForecastMeta {
        ForecastMeta {
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation,
            generationtime_ms: self.generationtime_ms,
            utc_offset_seconds: self.utc_offset_seconds,
            timezone: self.timezone.clone(),
            temperature_unit: self.hourly_units.temperature_2m.clone(),
            rain_unit: self.hourly_units.rain.clone(),
            showers_unit: self.hourly_units.showers.clone(),
            visibility_unit: self.hourly_units.visibility.clone(),
        }
    }
}

/// Unit strings reported by the API, one per measured quantity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlyUnits {
    pub time: String,
    pub temperature_2m: String,
    pub rain: String,
    pub showers: String,
    pub visibility: String,
}

/// The parallel hourly arrays of the forecast.
///
/// `time` holds ISO 8601 local timestamps (`2024-06-01T13:00`); the
/// quantity arrays may contain nulls where the model has no value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub rain: Vec<Option<f64>>,
    pub showers: Vec<Option<f64>>,
    pub visibility: Vec<Option<f64>>,
}

impl HourlySeries {
    /// Number of hours in the series, taken from the time array.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Checks that every quantity array is index-aligned with `time`.
    ///
    /// Pairing arrays of unequal length row-by-row would silently misalign
    /// every downstream aggregate, so a mismatch fails here, naming the
    /// offending field and both lengths.
    pub fn validate(&self) -> Result<(), TransformError> {
        let expected = self.time.len();
        for (field, found) in [
            ("temperature_2m", self.temperature_2m.len()),
            ("rain", self.rain.len()),
            ("showers", self.showers.len()),
            ("visibility", self.visibility.len()),
        ] {
            if found != expected {
                return Err(TransformError::SeriesLengthMismatch {
                    field: field.to_string(),
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// Scalar metadata of a forecast response, lifted out of the row data.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastMeta {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i32,
    pub timezone: String,
    pub temperature_unit: String,
    pub rain_unit: String,
    pub showers_unit: String,
    pub visibility_unit: String,
}
