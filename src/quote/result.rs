//! Quote output rows

use serde::{Deserialize, Serialize};

/// Full cost breakdown for one quote
///
/// All amounts are unrounded pounds; formatting for display is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Loan principal (property value minus deposit)
    pub loan_amount: f64,

    /// Loan-to-value as a percentage of the purchase price
    pub ltv_pct: f64,

    /// Deposit as a percentage of the purchase price
    pub deposit_pct: f64,

    /// Fixed monthly repayment over the term
    pub monthly_payment: f64,

    /// Sum of all repayments plus the deposit
    pub total_cost: f64,

    /// Interest paid over the term (repayments minus principal)
    pub total_interest: f64,

    /// Stamp duty on the purchase
    pub stamp_duty: f64,

    /// Whether first-time buyer relief rates were used for the duty
    pub ftb_relief_applied: bool,
}
