//! Builds the hourly dataframe out of the typed forecast record.

use crate::transform::error::TransformError;
use crate::types::forecast::HourlySeries;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Parses one Open-Meteo hourly timestamp.
///
/// The API's iso8601 mode renders minutes precision (`2024-06-01T13:00`);
/// a seconds-bearing variant is accepted as well.
pub(crate) fn parse_hour_timestamp(value: &str) -> Result<NaiveDateTime, TransformError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| TransformError::TimestampParse {
            value: value.to_string(),
            source: e,
        })
}

/// Expands the parallel hourly arrays into a dataframe with one row per
/// hour: a `date` column (the timestamp truncated to its calendar date)
/// plus the four quantity columns.
pub(crate) fn hourly_dataframe(series: &HourlySeries) -> Result<DataFrame, TransformError> {
    series.validate()?;

    // NaiveDate::default() is the Unix epoch, the reference Date dtype uses.
    let epoch = NaiveDate::default();
    let mut days: Vec<i32> = Vec::with_capacity(series.len());
    for time in &series.time {
        let date = parse_hour_timestamp(time)?.date();
        days.push((date - epoch).num_days() as i32);
    }

    let date = Column::new("date".into(), days).cast(&DataType::Date)?;
    let frame = DataFrame::new(vec![
        date,
        Column::new("temperature_2m".into(), series.temperature_2m.clone()),
        Column::new("rain".into(), series.rain.clone()),
        Column::new("showers".into(), series.showers.clone()),
        Column::new("visibility".into(), series.visibility.clone()),
    ])?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(times: &[&str]) -> HourlySeries {
        let n = times.len();
        HourlySeries {
            time: times.iter().map(|t| t.to_string()).collect(),
            temperature_2m: vec![Some(10.0); n],
            rain: vec![Some(0.0); n],
            showers: vec![Some(0.0); n],
            visibility: vec![Some(20000.0); n],
        }
    }

    #[test]
    fn test_parse_minutes_precision() {
        let parsed = parse_hour_timestamp("2024-06-01T13:00").unwrap();
        assert_eq!(
            parsed.date(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(parsed.time().to_string(), "13:00:00");
    }

    #[test]
    fn test_parse_seconds_precision() {
        let parsed = parse_hour_timestamp("2024-06-01T13:00:00").unwrap();
        assert_eq!(parsed.time().to_string(), "13:00:00");
    }

    #[test]
    fn test_parse_garbage_fails() {
        let result = parse_hour_timestamp("not-a-timestamp");
        assert!(matches!(
            result,
            Err(TransformError::TimestampParse { .. })
        ));
    }

    #[test]
    fn test_hourly_dataframe_shape_and_dates() {
        let series = series(&["2024-06-01T23:00", "2024-06-02T00:00", "2024-06-02T01:00"]);
        let frame = hourly_dataframe(&series).unwrap();

        assert_eq!(frame.shape(), (3, 5));
        assert_eq!(
            frame.get_column_names(),
            ["date", "temperature_2m", "rain", "showers", "visibility"]
        );
        assert_eq!(frame.column("date").unwrap().dtype(), &DataType::Date);

        let epoch = NaiveDate::default();
        let dates = frame.column("date").unwrap().date().unwrap();
        let first = epoch + chrono::Duration::days(dates.get(0).unwrap() as i64);
        let second = epoch + chrono::Duration::days(dates.get(1).unwrap() as i64);
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(second, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn test_hourly_dataframe_keeps_nulls() {
        let mut series = series(&["2024-06-01T00:00", "2024-06-01T01:00"]);
        series.temperature_2m = vec![Some(10.0), None];
        let frame = hourly_dataframe(&series).unwrap();

        let temps = frame.column("temperature_2m").unwrap().f64().unwrap();
        assert_eq!(temps.get(0), Some(10.0));
        assert_eq!(temps.get(1), None);
    }

    #[test]
    fn test_hourly_dataframe_rejects_misaligned_series() {
        let mut series = series(&["2024-06-01T00:00", "2024-06-01T01:00"]);
        series.rain.pop();
        let result = hourly_dataframe(&series);
        assert!(matches!(
            result,
            Err(TransformError::SeriesLengthMismatch { .. })
        ));
    }
}
