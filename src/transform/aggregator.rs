//! Daily rollup of the hourly forecast frame.
//!
//! Reads the raw JSON file the fetcher wrote, expands it into an hourly
//! dataframe, groups rows by calendar date and writes the aggregated
//! result as parquet.

use crate::transform::error::TransformError;
use crate::transform::frame::hourly_dataframe;
use crate::types::forecast::{ForecastMeta, ForecastResponse};
use log::{debug, info};
use polars::prelude::*;
use std::path::Path;
use tokio::task;

/// Aggregate function applied to one hourly quantity.
#[derive(Debug, Clone, Copy)]
enum DailyStat {
    Mean,
    Sum,
    Min,
    Max,
}

impl DailyStat {
    fn suffix(self) -> &'static str {
        match self {
            DailyStat::Mean => "mean",
            DailyStat::Sum => "sum",
            DailyStat::Min => "min",
            DailyStat::Max => "max",
        }
    }

    /// Output columns are named `<quantity>_<aggregate>`, the flattened
    /// form of the (quantity, aggregate-function) pair.
    fn expr(self, quantity: &str) -> Expr {
        let base = col(quantity);
        let agg = match self {
            DailyStat::Mean => base.mean(),
            DailyStat::Sum => base.sum(),
            DailyStat::Min => base.min(),
            DailyStat::Max => base.max(),
        };
        agg.alias(format!("{}_{}", quantity, self.suffix()))
    }
}

/// Aggregates computed per quantity per day. Intensive quantities get a
/// mean, accumulative ones a sum; all carry their daily extremes.
const DAILY_STATS: [(&str, [DailyStat; 3]); 4] = [
    (
        "temperature_2m",
        [DailyStat::Mean, DailyStat::Min, DailyStat::Max],
    ),
    ("rain", [DailyStat::Sum, DailyStat::Min, DailyStat::Max]),
    ("showers", [DailyStat::Sum, DailyStat::Min, DailyStat::Max]),
    (
        "visibility",
        [DailyStat::Mean, DailyStat::Min, DailyStat::Max],
    ),
];

fn daily_agg_exprs() -> Vec<Expr> {
    DAILY_STATS
        .iter()
        .flat_map(|&(quantity, stats)| stats.into_iter().map(move |stat| stat.expr(quantity)))
        .collect()
}

/// Summary of one completed transform step.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    /// Scalar metadata lifted from the forecast response.
    pub meta: ForecastMeta,
    /// Hourly rows that went into the aggregation.
    pub hours: usize,
    /// Daily rows written, one per distinct calendar date.
    pub days: usize,
}

/// Reads the raw forecast JSON at `raw_path`, aggregates it per calendar
/// date and writes the result as snappy-compressed parquet to
/// `output_path`, sorted by date ascending.
pub async fn aggregate_daily_to_parquet(
    raw_path: &Path,
    output_path: &Path,
) -> Result<TransformReport, TransformError> {
    let bytes = tokio::fs::read(raw_path)
        .await
        .map_err(|e| TransformError::FileRead(raw_path.to_path_buf(), e))?;
    let response: ForecastResponse = serde_json::from_slice(&bytes)
        .map_err(|e| TransformError::JsonParse(raw_path.to_path_buf(), e))?;

    let meta = response.meta();
    debug!("Forecast metadata: {:?}", meta);

    let hourly = hourly_dataframe(&response.hourly)?;
    let hours = hourly.height();

    let daily = hourly
        .lazy()
        .group_by([col("date")])
        .agg(daily_agg_exprs())
        .sort(["date"], Default::default())
        .collect()?;
    let days = daily.height();

    write_parquet(daily, output_path).await?;
    info!(
        "Aggregated {} hourly rows into {} daily rows at {:?}",
        hours, days, output_path
    );

    Ok(TransformReport { meta, hours, days })
}

/// Writes a DataFrame to a parquet file from a blocking task.
async fn write_parquet(mut frame: DataFrame, path: &Path) -> Result<(), TransformError> {
    let path_buf = path.to_path_buf();
    task::spawn_blocking(move || {
        let file = std::fs::File::create(&path_buf)
            .map_err(|e| TransformError::ParquetWriteIo(path_buf.clone(), e))?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut frame)
            .map_err(|e| TransformError::ParquetWritePolars(path_buf, e))?;
        Ok::<(), TransformError>(())
    })
    .await??;
    Ok(())
}
