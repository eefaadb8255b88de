//! Load band tables from CSV
//!
//! Expected columns: `upper_bound,rate` with one row per band, bounds
//! ascending. A blank upper bound marks the open-ended top band.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{SdltBand, SdltSchedule};

#[derive(Debug, Deserialize)]
struct BandRow {
    upper_bound: Option<f64>,
    rate: f64,
}

/// Load a schedule from a CSV file
pub fn load_schedule<P: AsRef<Path>>(
    path: P,
    label: &str,
    effective_from: NaiveDate,
) -> Result<SdltSchedule> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open band table {}", path.display()))?;
    load_schedule_from_reader(file, label, effective_from)
        .with_context(|| format!("invalid band table {}", path.display()))
}

/// Load a schedule from any CSV reader
pub fn load_schedule_from_reader<R: Read>(
    reader: R,
    label: &str,
    effective_from: NaiveDate,
) -> Result<SdltSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut bands = Vec::new();

    for (i, row) in csv_reader.deserialize().enumerate() {
        let row: BandRow = row.with_context(|| format!("band row {}", i + 1))?;
        bands.push(SdltBand::new(row.upper_bound, row.rate));
    }

    validate_bands(&bands)?;
    log::info!("loaded {} bands for schedule '{}'", bands.len(), label);

    Ok(SdltSchedule::from_bands(label, effective_from, bands))
}

fn validate_bands(bands: &[SdltBand]) -> Result<()> {
    if bands.is_empty() {
        bail!("band table is empty");
    }

    let mut prev_upper = 0.0;
    for (i, band) in bands.iter().enumerate() {
        if !(0.0..=1.0).contains(&band.rate) {
            bail!("band {} rate {} outside [0, 1]", i + 1, band.rate);
        }
        match band.upper_bound {
            Some(upper) => {
                if upper <= prev_upper {
                    bail!("band {} upper bound {} not ascending", i + 1, upper);
                }
                prev_upper = upper;
            }
            // Open-ended band must come last
            None => {
                if i + 1 != bands.len() {
                    bail!("open-ended band {} is not the final band", i + 1);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn test_load_standard_table() {
        let csv = "upper_bound,rate\n\
                   125000,0.0\n\
                   250000,0.02\n\
                   925000,0.05\n\
                   1500000,0.10\n\
                   ,0.12\n";

        let schedule = load_schedule_from_reader(csv.as_bytes(), "standard", date()).unwrap();

        assert_eq!(schedule.bands().len(), 5);
        assert!((schedule.duty_on(250_000.0) - 2_500.0).abs() < 1e-9);
        assert!((schedule.duty_on(2_000_000.0) - 153_750.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounded_table_allowed() {
        // The FTB table legitimately ends at the relief ceiling
        let csv = "upper_bound,rate\n300000,0.0\n500000,0.05\n";

        let schedule = load_schedule_from_reader(csv.as_bytes(), "ftb", date()).unwrap();
        assert!((schedule.duty_on(500_000.0) - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_ascending_bounds() {
        let csv = "upper_bound,rate\n250000,0.0\n125000,0.02\n";
        assert!(load_schedule_from_reader(csv.as_bytes(), "bad", date()).is_err());
    }

    #[test]
    fn test_rejects_misplaced_open_band() {
        let csv = "upper_bound,rate\n,0.12\n125000,0.0\n";
        assert!(load_schedule_from_reader(csv.as_bytes(), "bad", date()).is_err());
    }

    #[test]
    fn test_rejects_empty_table() {
        let csv = "upper_bound,rate\n";
        assert!(load_schedule_from_reader(csv.as_bytes(), "bad", date()).is_err());
    }
}
