//! Ties the two pipeline steps together: fetch the raw forecast, then
//! roll it up into the daily parquet file.

use crate::error::MeteopipeError;
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::ForecastFetcher;
use crate::request::ForecastRequest;
use crate::transform::aggregator::{aggregate_daily_to_parquet, TransformReport};
use crate::transform::error::TransformError;
use log::error;
use std::path::Path;

/// Outcome of one pipeline run, one result per step.
///
/// Callers observe what happened through these results instead of having
/// to inspect logs or probe for output files.
#[derive(Debug)]
pub struct RunReport {
    pub fetch: Result<(), FetchError>,
    pub transform: Result<TransformReport, TransformError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.fetch.is_ok() && self.transform.is_ok()
    }

    /// Collapses the report into a single result, keeping the first error.
    pub fn into_result(self) -> Result<TransformReport, MeteopipeError> {
        self.fetch?;
        Ok(self.transform?)
    }
}

/// Runs the fetch and transform steps against a pair of file paths.
///
/// # Examples
///
/// ```no_run
/// use meteopipe::{ForecastPipeline, ForecastRequest, LatLon};
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() {
/// let request = ForecastRequest::builder()
///     .location(LatLon(51.5085, -0.1257))
///     .build();
/// let pipeline = ForecastPipeline::new();
/// let report = pipeline
///     .run(&request, Path::new("sample_data.json"), Path::new("output_data.parquet"))
///     .await;
/// if let Ok(summary) = &report.transform {
///     println!("{} daily rows written", summary.days);
/// }
/// # }
/// ```
pub struct ForecastPipeline {
    fetcher: ForecastFetcher,
}

impl ForecastPipeline {
    pub fn new() -> Self {
        Self {
            fetcher: ForecastFetcher::new(),
        }
    }

    /// Fetches the forecast described by `request` into `raw_path`, then
    /// aggregates `raw_path` into `output_path`.
    ///
    /// The transform step runs even when the fetch failed: it then reads
    /// whatever file a previous run left at `raw_path`. Each step's error
    /// is logged where it occurs and carried on the returned report.
    pub async fn run(
        &self,
        request: &ForecastRequest,
        raw_path: &Path,
        output_path: &Path,
    ) -> RunReport {
        let fetch = self.fetcher.fetch_to_file(&request.url(), raw_path).await;
        if let Err(e) = &fetch {
            error!("Forecast download failed: {}", e);
        }

        let transform = aggregate_daily_to_parquet(raw_path, output_path).await;
        if let Err(e) = &transform {
            error!("Daily aggregation failed: {}", e);
        }

        RunReport { fetch, transform }
    }
}

impl Default for ForecastPipeline {
    fn default() -> Self {
        Self::new()
    }
}
