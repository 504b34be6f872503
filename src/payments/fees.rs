use crate::decimal::Money;
use crate::types::{Fee, FeeKind};

/// total additional cost of a fee schedule against a vehicle price
///
/// fixed fees contribute their amount directly; percentage fees contribute
/// their share of the price; an empty schedule costs nothing
pub fn total(fees: &[Fee], vehicle_price: Money) -> Money {
    fees.iter()
        .fold(Money::ZERO, |acc, fee| acc + fee.applied_to(vehicle_price))
}

/// itemized split between flat and price-dependent charges
#[derive(Debug, Clone, PartialEq)]
pub struct FeeBreakdown {
    pub fixed: Money,
    pub percentage_based: Money,
    pub total: Money,
}

pub fn breakdown(fees: &[Fee], vehicle_price: Money) -> FeeBreakdown {
    let mut fixed = Money::ZERO;
    let mut percentage_based = Money::ZERO;

    for fee in fees {
        match fee.kind {
            FeeKind::Fixed => fixed += fee.applied_to(vehicle_price),
            FeeKind::Percentage => percentage_based += fee.applied_to(vehicle_price),
        }
    }

    FeeBreakdown {
        fixed,
        percentage_based,
        total: fixed + percentage_based,
    }
}
