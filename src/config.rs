use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, SimulationError};

/// policy values for the simulator
///
/// defaults match the reference application's intake rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// lowest adjusted tax percentage any credit profile can reach
    pub rate_floor_percentage: Decimal,
    pub min_term_months: u32,
    pub max_term_months: u32,
    /// down payment cap as a fraction of vehicle price
    pub down_payment_cap: Decimal,
    /// applicant income floor from the intake form
    pub min_monthly_income: Money,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            rate_floor_percentage: dec!(0.1),
            min_term_months: 12,
            max_term_months: 84,
            down_payment_cap: dec!(0.8),
            min_monthly_income: Money::from_major(182),
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rate_floor_percentage.is_sign_negative() {
            return Err(SimulationError::InvalidConfiguration {
                message: format!("rate floor must not be negative: {}", self.rate_floor_percentage),
            });
        }

        if self.min_term_months == 0 || self.min_term_months > self.max_term_months {
            return Err(SimulationError::InvalidConfiguration {
                message: format!(
                    "term bounds must satisfy 0 < min <= max: {}-{}",
                    self.min_term_months, self.max_term_months
                ),
            });
        }

        if self.down_payment_cap < Decimal::ZERO || self.down_payment_cap > Decimal::ONE {
            return Err(SimulationError::InvalidConfiguration {
                message: format!("down payment cap must be within [0, 1]: {}", self.down_payment_cap),
            });
        }

        if self.min_monthly_income.is_negative() {
            return Err(SimulationError::InvalidConfiguration {
                message: format!("minimum income must not be negative: {}", self.min_monthly_income),
            });
        }

        Ok(())
    }

    /// largest down payment accepted for a given vehicle price
    pub fn max_down_payment(&self, vehicle_price: Money) -> Money {
        Money::from_decimal(vehicle_price.as_decimal() * self.down_payment_cap)
    }
}
