//! Amortization and quote composition

use crate::schedules::SdltAssumptions;

use super::{InvalidInput, Quote, QuoteRequest};

/// Fixed monthly repayment for a standard amortizing loan
///
/// Uses the closed-form annuity formula with the annual percentage rate
/// compounded monthly. At a zero rate the formula degenerates to a division
/// by zero, so the payment falls back to straight-line repayment of the
/// principal.
///
/// `term_years` must be at least 1; `QuoteRequest::validate` enforces this
/// before the engine calls here.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let installments = (term_years * 12) as f64;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return principal / installments;
    }

    let growth = (1.0 + monthly_rate).powf(installments);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Computes full quotes from borrower inputs
///
/// Pure and synchronous: every call is independent and deterministic given
/// its inputs, safe to re-run on every edit.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    sdlt: SdltAssumptions,
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(SdltAssumptions::default())
    }
}

impl QuoteEngine {
    pub fn new(sdlt: SdltAssumptions) -> Self {
        Self { sdlt }
    }

    pub fn sdlt(&self) -> &SdltAssumptions {
        &self.sdlt
    }

    /// Validate the request and compute its full breakdown
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, InvalidInput> {
        request.validate()?;

        let principal = request.principal();
        let installments = (request.term_years * 12) as f64;

        let payment = monthly_payment(principal, request.annual_rate_pct, request.term_years);
        let total_of_payments = payment * installments;

        let stamp_duty = self
            .sdlt
            .duty(request.property_value, request.first_time_buyer);

        // A £0 purchase leaves both percentages at zero
        let (ltv_pct, deposit_pct) = if request.property_value > 0.0 {
            (
                principal / request.property_value * 100.0,
                request.deposit / request.property_value * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        let quote = Quote {
            loan_amount: principal,
            ltv_pct,
            deposit_pct,
            monthly_payment: payment,
            total_cost: total_of_payments + request.deposit,
            total_interest: total_of_payments - principal,
            stamp_duty,
            ftb_relief_applied: self
                .sdlt
                .relief_applies(request.property_value, request.first_time_buyer),
        };

        log::debug!(
            "quoted £{:.0} at {}% over {}y: monthly £{:.2}, duty £{:.2}",
            request.property_value,
            request.annual_rate_pct,
            request.term_years,
            quote.monthly_payment,
            quote.stamp_duty
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn request() -> QuoteRequest {
        QuoteRequest {
            property_value: 250_000.0,
            deposit: 25_000.0,
            annual_rate_pct: 5.5,
            term_years: 25,
            first_time_buyer: false,
        }
    }

    #[test]
    fn test_worked_example() {
        // £225k principal at 5.5% over 25 years
        let quote = QuoteEngine::default().quote(&request()).unwrap();

        assert_eq!(quote.loan_amount, 225_000.0);
        assert_relative_eq!(quote.monthly_payment, 1_381.7, max_relative = 1e-3);
        // Value stops exactly at the top of the 2% band
        assert_relative_eq!(quote.stamp_duty, 2_500.0, max_relative = 1e-9);
        assert_relative_eq!(quote.ltv_pct, 90.0, max_relative = 1e-9);
        assert_relative_eq!(quote.deposit_pct, 10.0, max_relative = 1e-9);
        assert!(!quote.ftb_relief_applied);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let zero_rate = QuoteRequest {
            annual_rate_pct: 0.0,
            ..request()
        };
        let quote = QuoteEngine::default().quote(&zero_rate).unwrap();

        // Exactly principal / n, no interest at all
        assert_eq!(quote.monthly_payment, 225_000.0 / 300.0);
        assert_relative_eq!(quote.total_interest, 0.0, epsilon = 1e-6);
        assert_relative_eq!(quote.total_cost, 250_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_accounting_identity() {
        let engine = QuoteEngine::default();

        for rate in [0.0, 1.25, 3.9, 5.5, 12.0] {
            for term in [5, 10, 25, 40] {
                let r = QuoteRequest {
                    annual_rate_pct: rate,
                    term_years: term,
                    ..request()
                };
                let quote = engine.quote(&r).unwrap();
                let rebuilt = quote.total_interest + r.principal() + r.deposit;
                assert_relative_eq!(quote.total_cost, rebuilt, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_ftb_relief_flag_and_duty() {
        let engine = QuoteEngine::default();

        let ftb = QuoteRequest {
            property_value: 300_000.0,
            deposit: 30_000.0,
            first_time_buyer: true,
            ..request()
        };
        let quote = engine.quote(&ftb).unwrap();
        assert_eq!(quote.stamp_duty, 0.0);
        assert!(quote.ftb_relief_applied);

        // Over the ceiling: full standard duty, no relief
        let over = QuoteRequest {
            property_value: 500_001.0,
            deposit: 50_000.0,
            first_time_buyer: true,
            ..request()
        };
        let quote = engine.quote(&over).unwrap();
        assert!((quote.stamp_duty - 15_000.05).abs() < 1e-6);
        assert!(!quote.ftb_relief_applied);
    }

    #[test]
    fn test_invalid_input_produces_no_quote() {
        let bad = QuoteRequest {
            deposit: 300_000.0,
            ..request()
        };
        assert!(matches!(
            QuoteEngine::default().quote(&bad),
            Err(InvalidInput::DepositExceedsPropertyValue { .. })
        ));
    }

    #[test]
    fn test_full_deposit_purchase() {
        let cash = QuoteRequest {
            deposit: 250_000.0,
            ..request()
        };
        let quote = QuoteEngine::default().quote(&cash).unwrap();

        assert_eq!(quote.monthly_payment, 0.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_cost, 250_000.0);
        assert_eq!(quote.ltv_pct, 0.0);
        assert_eq!(quote.deposit_pct, 100.0);
    }

    #[test]
    fn test_monthly_payment_monotone_in_rate() {
        let mut prev = monthly_payment(225_000.0, 0.0, 25);
        for step in 1..=20 {
            let rate = step as f64 * 0.5;
            let payment = monthly_payment(225_000.0, rate, 25);
            assert!(payment > prev, "payment fell as rate rose to {}%", rate);
            prev = payment;
        }
    }
}
