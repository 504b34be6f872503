pub mod menu;
pub mod resolver;

pub use menu::{adjusted_rate, default_profile, AdjustedRate, RateMenu};
pub use resolver::{anchor_year, resolve};
