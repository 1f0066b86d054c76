use log::info;
use meteopipe::{ForecastPipeline, ForecastRequest, LatLon};
use std::path::Path;

/// Fixed fetch location: central London.
const LOCATION: LatLon = LatLon(51.5085, -0.1257);
/// Where the raw API response lands between the two steps.
const RAW_DATA_PATH: &str = "sample_data.json";
/// The durable daily-aggregate artifact.
const OUTPUT_PATH: &str = "output_data.parquet";

#[tokio::main]
async fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let request = ForecastRequest::builder().location(LOCATION).build();
    let pipeline = ForecastPipeline::new();
    let report = pipeline
        .run(&request, Path::new(RAW_DATA_PATH), Path::new(OUTPUT_PATH))
        .await;

    // Step failures were logged where they occurred; the process exits 0 either way.
    if let Ok(summary) = &report.transform {
        info!(
            "Aggregated {} hourly rows into {} daily rows for {}, {}",
            summary.hours, summary.days, summary.meta.latitude, summary.meta.longitude
        );
    }
}
