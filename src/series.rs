// =============================================================================
// Series I/O — CSV price history in, JSON index records out
// =============================================================================
//
// File plumbing for the offline runner. The engine itself never touches the
// filesystem; callers embedding the library can feed it `PricePoint`s from
// any source.
//
// Input format: a CSV with a `date,close` header, dates as YYYY-MM-DD,
// sorted ascending (the provider contract — the engine re-validates).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{IndexRecord, PricePoint};

/// One row of an input price-history CSV.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    close: f64,
}

/// Load a `date,close` CSV file into a price series.
pub fn load_price_csv(path: impl AsRef<Path>) -> Result<Vec<PricePoint>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open price CSV {}", path.display()))?;

    let mut series = Vec::new();
    for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.with_context(|| {
            format!("failed to parse row {} of {}", line + 2, path.display())
        })?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").with_context(|| {
            format!("bad date {:?} on row {} of {}", row.date, line + 2, path.display())
        })?;
        series.push(PricePoint::new(date, row.close));
    }
    Ok(series)
}

/// Serialise index records to pretty JSON.
pub fn records_to_json(records: &[IndexRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("failed to serialise index records to JSON")
}

/// Write index records as pretty JSON to `path`.
pub fn write_records_json(records: &[IndexRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = records_to_json(records)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write index JSON to {}", path.display()))
}
