//! Sensitivity sweep generator
//!
//! Builds a grid of quote requests around a base case, varying the interest
//! rate and the deposit percentage. Used to show a borrower how the monthly
//! payment moves as either input is nudged.

use serde::{Deserialize, Serialize};

use crate::quote::{
    QuoteRequest, DEFAULT_ANNUAL_RATE_PCT, DEFAULT_DEPOSIT_PCT, DEFAULT_PROPERTY_VALUE,
    DEFAULT_TERM_YEARS,
};

/// Parameters for generating a sweep grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepParams {
    /// Base purchase price
    #[serde(default = "default_property_value")]
    pub property_value: f64,

    /// Base deposit as a percentage of the purchase price
    #[serde(default = "default_deposit_pct")]
    pub deposit_pct: f64,

    /// Base annual interest rate (percent)
    #[serde(default = "default_rate")]
    pub annual_rate_pct: f64,

    /// Repayment term in years
    #[serde(default = "default_term")]
    pub term_years: u32,

    #[serde(default)]
    pub first_time_buyer: bool,

    /// Rate varies across base ± span (percentage points)
    #[serde(default = "default_rate_span")]
    pub rate_span: f64,

    /// Step between rate points (percentage points)
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,

    /// Deposit percentage varies across base ± span
    #[serde(default = "default_deposit_span")]
    pub deposit_pct_span: f64,

    /// Step between deposit percentage points
    #[serde(default = "default_deposit_step")]
    pub deposit_pct_step: f64,
}

fn default_property_value() -> f64 { DEFAULT_PROPERTY_VALUE }
fn default_deposit_pct() -> f64 { DEFAULT_DEPOSIT_PCT }
fn default_rate() -> f64 { DEFAULT_ANNUAL_RATE_PCT }
fn default_term() -> u32 { DEFAULT_TERM_YEARS }
fn default_rate_span() -> f64 { 1.0 }
fn default_rate_step() -> f64 { 0.1 }
fn default_deposit_span() -> f64 { 5.0 }
fn default_deposit_step() -> f64 { 1.0 }

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            property_value: DEFAULT_PROPERTY_VALUE,
            deposit_pct: DEFAULT_DEPOSIT_PCT,
            annual_rate_pct: DEFAULT_ANNUAL_RATE_PCT,
            term_years: DEFAULT_TERM_YEARS,
            first_time_buyer: false,
            rate_span: 1.0,
            rate_step: 0.1,
            deposit_pct_span: 5.0,
            deposit_pct_step: 1.0,
        }
    }
}

impl SweepParams {
    /// Generate the request grid
    ///
    /// Rates clamp at 0% and deposit percentages at [0%, 100%], so grids
    /// centered near an edge simply lose the out-of-range points. Rates are
    /// kept to two decimal places and deposit percentages to one, matching
    /// the granularity quoted to borrowers.
    pub fn generate(&self) -> Vec<QuoteRequest> {
        let rate_points = axis_points(self.annual_rate_pct, self.rate_span, self.rate_step, 2);
        let deposit_points = axis_points(
            self.deposit_pct,
            self.deposit_pct_span,
            self.deposit_pct_step,
            1,
        );

        let mut requests =
            Vec::with_capacity(rate_points.len() * deposit_points.len());
        for &deposit_pct in &deposit_points {
            if !(0.0..=100.0).contains(&deposit_pct) {
                continue;
            }
            let deposit = self.property_value * deposit_pct / 100.0;
            for &rate in &rate_points {
                if rate < 0.0 {
                    continue;
                }
                requests.push(QuoteRequest {
                    property_value: self.property_value,
                    deposit,
                    annual_rate_pct: rate,
                    term_years: self.term_years,
                    first_time_buyer: self.first_time_buyer,
                });
            }
        }

        log::debug!(
            "sweep generated {} requests ({} rates x {} deposits before clamping)",
            requests.len(),
            rate_points.len(),
            deposit_points.len()
        );
        requests
    }
}

/// Evenly spaced points across base ± span, rounded to `decimals` places
fn axis_points(base: f64, span: f64, step: f64, decimals: u32) -> Vec<f64> {
    if step <= 0.0 || span < 0.0 {
        return vec![base];
    }

    let scale = 10f64.powi(decimals as i32);
    let half_steps = (span / step).round() as i64;
    (-half_steps..=half_steps)
        .map(|i| ((base + i as f64 * step) * scale).round() / scale)
        .collect()
}
