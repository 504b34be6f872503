use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SimulatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulationError};
use crate::payments::{amortization, fees};
use crate::types::Fee;

/// inputs for one financing simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub vehicle_price: Money,
    pub down_payment: Money,
    pub term_months: u32,
    /// annual tax rate applied to the financed amount
    pub annual_rate: Rate,
    pub fees: Vec<Fee>,
}

impl SimulationRequest {
    /// intake-form validation; the calculation itself only guards its
    /// numeric preconditions
    pub fn validate(&self, config: &SimulatorConfig) -> Result<()> {
        if !self.vehicle_price.is_positive() {
            return Err(SimulationError::InvalidVehiclePrice {
                price: self.vehicle_price,
            });
        }

        if self.down_payment.is_negative() {
            return Err(SimulationError::InvalidDownPayment {
                provided: self.down_payment,
            });
        }

        let maximum = config.max_down_payment(self.vehicle_price);
        if self.down_payment > maximum {
            return Err(SimulationError::DownPaymentAboveCap {
                maximum,
                provided: self.down_payment,
            });
        }

        if self.term_months < config.min_term_months || self.term_months > config.max_term_months {
            return Err(SimulationError::TermOutOfRange {
                months: self.term_months,
                min: config.min_term_months,
                max: config.max_term_months,
            });
        }

        Ok(())
    }
}

/// applicant income check from the intake form; not part of the payment math
pub fn validate_income(income: Money, config: &SimulatorConfig) -> Result<()> {
    if income < config.min_monthly_income {
        return Err(SimulationError::IncomeBelowMinimum {
            minimum: config.min_monthly_income,
            provided: income,
        });
    }
    Ok(())
}

/// derived financing summary; a pure function of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// price minus down payment plus aggregated fees; the amortized principal
    pub financed_amount: Money,
    pub monthly_payment: Money,
    pub total_amount: Money,
    pub total_interest: Money,
    pub total_fees: Money,
}

/// financing calculation engine
///
/// pure and deterministic: identical requests yield identical results, and
/// nothing is shared between invocations
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancingEngine;

impl FinancingEngine {
    pub fn new() -> Self {
        Self
    }

    /// compute the financing summary
    ///
    /// `None` is the defined "not yet computable" state (nothing left to
    /// finance, zero term, degenerate arithmetic); callers keep whatever
    /// they showed before
    pub fn calculate(&self, request: &SimulationRequest) -> Option<SimulationResult> {
        let monthly_rate = request.annual_rate.monthly_rate();
        let total_fees = fees::total(&request.fees, request.vehicle_price);
        let financed_amount = request.vehicle_price - request.down_payment + total_fees;

        if !financed_amount.is_positive() || request.term_months == 0 {
            return None;
        }

        let monthly_payment =
            amortization::monthly_payment(financed_amount, monthly_rate, request.term_months)?;

        let total_amount =
            monthly_payment * Decimal::from(request.term_months) + request.down_payment;
        let total_interest = total_amount - request.vehicle_price - total_fees;

        Some(SimulationResult {
            financed_amount,
            monthly_payment,
            total_amount,
            total_interest,
            total_fees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use rust_decimal_macros::dec;

    fn reference_request() -> SimulationRequest {
        SimulationRequest {
            vehicle_price: Money::from_major(25_000),
            down_payment: Money::from_major(5_000),
            term_months: 60,
            annual_rate: Rate::from_percentage(dec!(4.5)),
            fees: vec![
                Fee::fixed("Documentation", dec!(299)),
                Fee::fixed("Delivery", dec!(150)),
            ],
        }
    }

    #[test]
    fn test_reference_scenario() {
        let engine = FinancingEngine::new();
        let result = engine.calculate(&reference_request()).unwrap();

        assert_eq!(result.total_fees, Money::from_major(449));
        assert_eq!(result.financed_amount, Money::from_major(20_449));

        let payment = result.monthly_payment.round_dp(2);
        assert!(
            (payment - Money::from_decimal(dec!(381.23))).abs() <= Money::from_decimal(dec!(0.01)),
            "unexpected payment {payment}"
        );
    }

    #[test]
    fn test_result_identities() {
        let request = reference_request();
        let result = FinancingEngine::new().calculate(&request).unwrap();

        // total amount is payment times term plus the down payment
        let reconstructed =
            result.monthly_payment * Decimal::from(request.term_months) + request.down_payment;
        assert_eq!(result.total_amount, reconstructed);

        // interest is whatever the buyer pays beyond price and fees
        assert_eq!(
            result.total_interest,
            result.total_amount - request.vehicle_price - result.total_fees
        );
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let request = SimulationRequest {
            annual_rate: Rate::ZERO,
            fees: Vec::new(),
            ..reference_request()
        };
        let result = FinancingEngine::new().calculate(&request).unwrap();

        assert_eq!(result.financed_amount, Money::from_major(20_000));
        assert_eq!(result.monthly_payment, Money::from_decimal(dec!(333.33333333)));
        // only rounding noise separates total interest from zero
        assert!(result.total_interest.abs() <= Money::from_decimal(dec!(0.000001)));
    }

    #[test]
    fn test_nothing_left_to_finance_yields_none() {
        let engine = FinancingEngine::new();

        // down payment swallows the full price and fees: financed amount 0
        let request = SimulationRequest {
            vehicle_price: Money::from_major(10_000),
            down_payment: Money::from_major(10_449),
            term_months: 48,
            annual_rate: Rate::from_percentage(dec!(9.8)),
            fees: vec![
                Fee::fixed("Documentation", dec!(299)),
                Fee::fixed("Delivery", dec!(150)),
            ],
        };
        assert!(engine.calculate(&request).is_none());

        // and a negative financed amount is no better
        let request = SimulationRequest {
            down_payment: Money::from_major(12_000),
            ..request
        };
        assert!(engine.calculate(&request).is_none());
    }

    #[test]
    fn test_zero_term_yields_none() {
        let request = SimulationRequest {
            term_months: 0,
            ..reference_request()
        };
        assert!(FinancingEngine::new().calculate(&request).is_none());
    }

    #[test]
    fn test_idempotence() {
        let engine = FinancingEngine::new();
        let request = reference_request();
        assert_eq!(engine.calculate(&request), engine.calculate(&request));
    }

    #[test]
    fn test_validate_accepts_reference_request() {
        assert!(reference_request().validate(&SimulatorConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_term_bounds() {
        let config = SimulatorConfig::default();

        let request = SimulationRequest { term_months: 11, ..reference_request() };
        assert!(matches!(
            request.validate(&config),
            Err(SimulationError::TermOutOfRange { months: 11, .. })
        ));

        let request = SimulationRequest { term_months: 85, ..reference_request() };
        assert!(request.validate(&config).is_err());

        for months in [12, 84] {
            let request = SimulationRequest { term_months: months, ..reference_request() };
            assert!(request.validate(&config).is_ok());
        }
    }

    #[test]
    fn test_validate_down_payment_cap() {
        let config = SimulatorConfig::default();

        // cap is 80% of the 25000 price
        let request = SimulationRequest {
            down_payment: Money::from_major(20_001),
            ..reference_request()
        };
        assert!(matches!(
            request.validate(&config),
            Err(SimulationError::DownPaymentAboveCap { .. })
        ));

        let request = SimulationRequest {
            down_payment: Money::from_major(20_000),
            ..reference_request()
        };
        assert!(request.validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let config = SimulatorConfig::default();
        let request = SimulationRequest {
            vehicle_price: Money::ZERO,
            ..reference_request()
        };
        assert!(matches!(
            request.validate(&config),
            Err(SimulationError::InvalidVehiclePrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_down_payment() {
        let config = SimulatorConfig::default();
        let request = SimulationRequest {
            down_payment: Money::ZERO - Money::ONE,
            ..reference_request()
        };
        assert!(matches!(
            request.validate(&config),
            Err(SimulationError::InvalidDownPayment { .. })
        ));
    }

    #[test]
    fn test_validate_income_floor() {
        let config = SimulatorConfig::default();
        assert!(validate_income(Money::from_major(182), &config).is_ok());
        assert!(matches!(
            validate_income(Money::from_major(181), &config),
            Err(SimulationError::IncomeBelowMinimum { .. })
        ));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_total_amount_identity(
            price_dollars in 1_000u32..150_000,
            down_pct in 0u32..80,
            term_months in 12u32..85,
            rate_tenths in 0u32..250
        ) {
            let vehicle_price = Money::from_major(price_dollars as i64);
            let down_payment = Money::from_decimal(
                vehicle_price.as_decimal() * Decimal::from(down_pct) / Decimal::from(100),
            );
            let request = SimulationRequest {
                vehicle_price,
                down_payment,
                term_months,
                annual_rate: Rate::from_percentage(Decimal::from(rate_tenths) / Decimal::from(10)),
                fees: vec![Fee::percentage("IPVA", dec!(4.0)), Fee::fixed("Licensing Fee", dec!(23.22))],
            };

            let result = FinancingEngine::new().calculate(&request);
            prop_assert!(result.is_some());
            let result = result.unwrap();

            let reconstructed =
                result.monthly_payment * Decimal::from(term_months) + down_payment;
            let drift = (result.total_amount - reconstructed).abs();
            prop_assert!(drift <= Money::from_decimal(dec!(0.00000001)));

            prop_assert!(result.financed_amount.is_positive());
            prop_assert!(result.monthly_payment.is_positive());
            prop_assert_eq!(
                result.total_interest,
                result.total_amount - vehicle_price - result.total_fees
            );
        }

        #[test]
        fn prop_identical_requests_identical_results(
            price_dollars in 1_000u32..80_000,
            term_months in 12u32..85
        ) {
            let request = SimulationRequest {
                vehicle_price: Money::from_major(price_dollars as i64),
                down_payment: Money::ZERO,
                term_months,
                annual_rate: Rate::from_percentage(dec!(11.2)),
                fees: Vec::new(),
            };
            let engine = FinancingEngine::new();
            prop_assert_eq!(engine.calculate(&request), engine.calculate(&request));
        }
    }
}
