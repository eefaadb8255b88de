//! Load quote scenarios from CSV
//!
//! Expected columns: `property_value,deposit,annual_rate_pct,term_years,
//! first_time_buyer`. The first-time buyer column may be omitted and
//! defaults to false.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::quote::QuoteRequest;

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<QuoteRequest>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario file {}", path.display()))?;
    load_scenarios_from_reader(file)
        .with_context(|| format!("invalid scenario file {}", path.display()))
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<QuoteRequest>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (i, row) in csv_reader.deserialize().enumerate() {
        let request: QuoteRequest = row.with_context(|| format!("scenario row {}", i + 1))?;
        scenarios.push(request);
    }

    log::info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
