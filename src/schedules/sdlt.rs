//! SDLT marginal band tables and duty computation
//!
//! Duty is charged on slices: each band taxes only the portion of the
//! purchase price falling inside it, never the whole price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FTB_RELIEF_CEILING;

/// One marginal band: the slice up to `upper_bound` taxed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdltBand {
    /// Upper bound of the band in pounds; `None` for the open-ended top band
    pub upper_bound: Option<f64>,
    /// Marginal rate applied within the band (e.g., 0.05 = 5%)
    pub rate: f64,
}

impl SdltBand {
    pub fn new(upper_bound: Option<f64>, rate: f64) -> Self {
        Self { upper_bound, rate }
    }
}

/// Ordered marginal band table for one buyer category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdltSchedule {
    /// Table name, e.g. "standard" or "first_time_buyer"
    pub label: String,
    /// Date the table came into force
    pub effective_from: NaiveDate,
    bands: Vec<SdltBand>,
}

impl SdltSchedule {
    /// Create from caller-supplied bands (e.g. loaded from CSV)
    pub fn from_bands(label: &str, effective_from: NaiveDate, bands: Vec<SdltBand>) -> Self {
        Self {
            label: label.to_string(),
            effective_from,
            bands,
        }
    }

    /// Standard residential rates for all buyers (April 2025)
    pub fn standard() -> Self {
        Self {
            label: "standard".to_string(),
            effective_from: april_2025(),
            bands: vec![
                SdltBand::new(Some(125_000.0), 0.0),   // 0% up to £125,000
                SdltBand::new(Some(250_000.0), 0.02),  // 2% on £125,001 - £250,000
                SdltBand::new(Some(925_000.0), 0.05),  // 5% on £250,001 - £925,000
                SdltBand::new(Some(1_500_000.0), 0.10), // 10% on £925,001 - £1,500,000
                SdltBand::new(None, 0.12),             // 12% on £1,500,001+
            ],
        }
    }

    /// First-time buyer relief rates (April 2025)
    ///
    /// Only meaningful for purchases at or below the relief ceiling; the
    /// table deliberately has no open-ended band.
    pub fn first_time_buyer() -> Self {
        Self {
            label: "first_time_buyer".to_string(),
            effective_from: april_2025(),
            bands: vec![
                SdltBand::new(Some(300_000.0), 0.0),  // 0% up to £300,000
                SdltBand::new(Some(500_000.0), 0.05), // 5% on £300,001 - £500,000
            ],
        }
    }

    pub fn bands(&self) -> &[SdltBand] {
        &self.bands
    }

    /// Whether this table is in force on the given completion date
    pub fn in_force_on(&self, date: NaiveDate) -> bool {
        date >= self.effective_from
    }

    /// Duty on a purchase price under this table
    ///
    /// Sums `rate * (min(price, upper) - lower)` over every band the price
    /// reaches, skipping bands entirely above it. Zero when the price sits
    /// inside a 0% band, and zero for non-positive prices.
    pub fn duty_on(&self, property_value: f64) -> f64 {
        let mut duty = 0.0;
        let mut lower = 0.0;

        for band in &self.bands {
            if property_value <= lower {
                break;
            }
            let upper = band.upper_bound.unwrap_or(f64::INFINITY);
            let taxable = property_value.min(upper) - lower;
            duty += taxable * band.rate;
            lower = upper;
        }

        duty
    }
}

fn april_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid calendar date")
}

/// The pair of tables the engine selects between, plus the relief ceiling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdltAssumptions {
    pub standard: SdltSchedule,
    pub first_time_buyer: SdltSchedule,
    /// Purchase price above which first-time buyers lose relief entirely
    pub ftb_relief_ceiling: f64,
}

impl Default for SdltAssumptions {
    fn default() -> Self {
        Self {
            standard: SdltSchedule::standard(),
            first_time_buyer: SdltSchedule::first_time_buyer(),
            ftb_relief_ceiling: FTB_RELIEF_CEILING,
        }
    }
}

impl SdltAssumptions {
    /// Whether relief rates apply to this purchase
    pub fn relief_applies(&self, property_value: f64, first_time_buyer: bool) -> bool {
        first_time_buyer && property_value <= self.ftb_relief_ceiling
    }

    /// Duty for a purchase, selecting the relief table when it applies
    pub fn duty(&self, property_value: f64, first_time_buyer: bool) -> f64 {
        if self.relief_applies(property_value, first_time_buyer) {
            self.first_time_buyer.duty_on(property_value)
        } else {
            self.standard.duty_on(property_value)
        }
    }
}
