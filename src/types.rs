use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// how a fee amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeKind {
    /// flat currency amount
    Fixed,
    /// percentage of the vehicle price
    Percentage,
}

/// charge applied on top of the vehicle price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub name: String,
    pub amount: Decimal,
    pub kind: FeeKind,
}

impl Fee {
    pub fn fixed(name: &str, amount: Decimal) -> Self {
        Self {
            name: name.to_string(),
            amount,
            kind: FeeKind::Fixed,
        }
    }

    pub fn percentage(name: &str, amount: Decimal) -> Self {
        Self {
            name: name.to_string(),
            amount,
            kind: FeeKind::Percentage,
        }
    }

    /// currency cost of this fee for a given vehicle price
    pub fn applied_to(&self, vehicle_price: Money) -> Money {
        match self.kind {
            FeeKind::Fixed => Money::from_decimal(self.amount),
            FeeKind::Percentage => vehicle_price.percentage(self.amount),
        }
    }
}

/// base tax bracket keyed by a vehicle-year anchor
///
/// reference data; brackets are never mutated once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub id: u32,
    /// anchor year the resolver maps model years onto
    pub vehicle_year: i32,
    pub year_range: String,
    pub description: String,
    pub base_rate: Rate,
    pub fees: Vec<Fee>,
}

/// named credit risk tier, ordered best to worst in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    /// percentage points added to a bracket's base rate; negative for
    /// strong credit
    pub rate_adjustment: Decimal,
}
