//! Quote engine: amortized repayments plus stamp duty

mod engine;
mod input;
mod result;

pub use engine::{monthly_payment, QuoteEngine};
pub use input::{InvalidInput, QuoteRequest};
pub use result::Quote;

// ============================================================================
// Default Quote Inputs
// ============================================================================
// Starting values presented to a borrower before they enter their own
// figures. A 10% deposit on a £250k purchase at 5.5% over 25 years.

/// Default purchase price (£250,000)
pub const DEFAULT_PROPERTY_VALUE: f64 = 250_000.0;

/// Default deposit percentage of the purchase price (10%)
pub const DEFAULT_DEPOSIT_PCT: f64 = 10.0;

/// Default annual interest rate (5.5%)
pub const DEFAULT_ANNUAL_RATE_PCT: f64 = 5.5;

/// Default repayment term in years
pub const DEFAULT_TERM_YEARS: u32 = 25;
