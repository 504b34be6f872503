pub mod catalog;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod payments;
pub mod rates;
pub mod simulator;
pub mod types;

// re-export key types
pub use catalog::Catalog;
pub use config::SimulatorConfig;
pub use decimal::{Money, Rate};
pub use engine::{FinancingEngine, SimulationRequest, SimulationResult};
pub use errors::{Result, SimulationError};
pub use rates::{AdjustedRate, RateMenu};
pub use simulator::Simulator;
pub use types::{CreditProfile, Fee, FeeKind, TaxBracket};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
