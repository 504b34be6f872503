pub mod amortization;
pub mod fees;

pub use amortization::monthly_payment;
pub use fees::FeeBreakdown;
