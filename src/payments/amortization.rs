use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// level monthly payment that fully amortizes a principal over a term
///
/// straight-line when the rate is zero, otherwise the standard annuity
/// formula PMT = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// `None` for a zero term or when the compounding factor degenerates
/// (overflowing exponentiation); callers surface that as a silent
/// no-result, never a panic
pub fn monthly_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> Option<Money> {
    if term_months == 0 {
        return None;
    }

    if monthly_rate.is_zero() {
        return Some(principal / Decimal::from(term_months));
    }

    let r = monthly_rate.as_decimal();
    let base = Decimal::ONE + r;

    let mut factor = Decimal::ONE;
    for _ in 0..term_months {
        factor = factor.checked_mul(base)?;
    }

    let numerator = principal.as_decimal().checked_mul(r.checked_mul(factor)?)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return None;
    }

    Some(Money::from_decimal(numerator / denominator))
}
