//! Quote request and input validation
//!
//! The engine rejects invalid figures outright rather than clamping them;
//! callers decide how to surface the correction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Borrower inputs for a single quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Purchase price in pounds
    pub property_value: f64,

    /// Cash deposit in pounds, `0 <= deposit <= property_value`
    pub deposit: f64,

    /// Annual interest rate as a percentage (5.5 = 5.5%/year)
    pub annual_rate_pct: f64,

    /// Repayment term in whole years, at least 1
    pub term_years: u32,

    /// Whether first-time buyer stamp duty relief may apply
    #[serde(default)]
    pub first_time_buyer: bool,
}

impl QuoteRequest {
    /// Loan principal implied by the request
    pub fn principal(&self) -> f64 {
        self.property_value - self.deposit
    }

    /// Check every input constraint, reporting the first violation
    pub fn validate(&self) -> Result<(), InvalidInput> {
        for (field, value) in [
            ("property_value", self.property_value),
            ("deposit", self.deposit),
            ("annual_rate_pct", self.annual_rate_pct),
        ] {
            if !value.is_finite() {
                return Err(InvalidInput::NonFinite { field });
            }
        }

        if self.property_value < 0.0 {
            return Err(InvalidInput::NegativePropertyValue(self.property_value));
        }
        if self.deposit < 0.0 {
            return Err(InvalidInput::NegativeDeposit(self.deposit));
        }
        if self.deposit > self.property_value {
            return Err(InvalidInput::DepositExceedsPropertyValue {
                deposit: self.deposit,
                property_value: self.property_value,
            });
        }
        if self.annual_rate_pct < 0.0 {
            return Err(InvalidInput::NegativeRate(self.annual_rate_pct));
        }
        if self.term_years < 1 {
            return Err(InvalidInput::ZeroTerm);
        }

        Ok(())
    }
}

/// Input constraint violations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("property value must be non-negative, got {0}")]
    NegativePropertyValue(f64),

    #[error("deposit must be non-negative, got {0}")]
    NegativeDeposit(f64),

    #[error("deposit {deposit} exceeds property value {property_value}")]
    DepositExceedsPropertyValue { deposit: f64, property_value: f64 },

    #[error("interest rate must be non-negative, got {0}%")]
    NegativeRate(f64),

    #[error("loan term must be at least one year")]
    ZeroTerm,

    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> QuoteRequest {
        QuoteRequest {
            property_value: 250_000.0,
            deposit: 25_000.0,
            annual_rate_pct: 5.5,
            term_years: 25,
            first_time_buyer: false,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_deposit_exceeding_value_rejected() {
        let request = QuoteRequest {
            deposit: 260_000.0,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(InvalidInput::DepositExceedsPropertyValue { .. })
        ));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let request = QuoteRequest {
            property_value: -1.0,
            deposit: -2.0,
            ..valid_request()
        };
        // Property value is checked first
        assert!(matches!(
            request.validate(),
            Err(InvalidInput::NegativePropertyValue(_))
        ));

        let request = QuoteRequest {
            annual_rate_pct: -0.5,
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(InvalidInput::NegativeRate(-0.5)));
    }

    #[test]
    fn test_zero_term_rejected() {
        let request = QuoteRequest {
            term_years: 0,
            ..valid_request()
        };
        assert_eq!(request.validate(), Err(InvalidInput::ZeroTerm));
    }

    #[test]
    fn test_non_finite_rejected() {
        let request = QuoteRequest {
            property_value: f64::NAN,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(InvalidInput::NonFinite { field: "property_value" })
        ));

        let request = QuoteRequest {
            annual_rate_pct: f64::INFINITY,
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(InvalidInput::NonFinite { field: "annual_rate_pct" })
        ));
    }

    #[test]
    fn test_full_deposit_is_valid() {
        let request = QuoteRequest {
            deposit: 250_000.0,
            ..valid_request()
        };
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(request.principal(), 0.0);
    }
}
