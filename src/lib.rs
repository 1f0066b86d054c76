mod error;
mod fetch;
mod pipeline;
mod request;
mod transform;
mod types;

#[cfg(test)]
mod test_support;

pub use error::MeteopipeError;
pub use pipeline::*;
pub use request::*;

pub use fetch::error::FetchError;
pub use fetch::fetcher::ForecastFetcher;

pub use transform::aggregator::{aggregate_daily_to_parquet, TransformReport};
pub use transform::error::TransformError;

pub use types::forecast::{ForecastMeta, ForecastResponse, HourlySeries, HourlyUnits};
pub use types::location::LatLon;
