use crate::catalog::Catalog;
use crate::config::SimulatorConfig;
use crate::decimal::Money;
use crate::engine::{FinancingEngine, SimulationRequest, SimulationResult};
use crate::errors::{Result, SimulationError};
use crate::rates::{self, RateMenu};
use crate::types::CreditProfile;

/// catalog-owning facade over the rate resolver and the financing engine
///
/// callers decide when to re-run it; every method is a pure read over the
/// owned reference data
#[derive(Debug, Clone)]
pub struct Simulator {
    catalog: Catalog,
    config: SimulatorConfig,
    engine: FinancingEngine,
}

impl Simulator {
    pub fn new(catalog: Catalog, config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            engine: FinancingEngine::new(),
        })
    }

    /// simulator over the built-in reference catalog and default policy
    pub fn with_builtin_catalog() -> Self {
        Self {
            catalog: Catalog::default(),
            config: SimulatorConfig::default(),
            engine: FinancingEngine::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// credit-adjusted rate variants for a vehicle year; empty when no
    /// bracket applies, so callers clear any previously shown rates
    pub fn rate_menu(&self, vehicle_year: i32) -> RateMenu {
        match rates::resolve(vehicle_year, &self.catalog.brackets) {
            Some(bracket) => RateMenu::build(
                bracket,
                &self.catalog.profiles,
                self.config.rate_floor_percentage,
            ),
            None => RateMenu::empty(),
        }
    }

    /// profile preselected before the user picks one; `None` on an empty
    /// catalog
    pub fn default_profile(&self) -> Option<&CreditProfile> {
        rates::default_profile(&self.catalog.profiles)
    }

    /// end-to-end quote: resolve the rate for (year, profile), validate the
    /// request against policy, then run the engine
    ///
    /// `Ok(None)` is the defined not-yet-computable state
    pub fn quote(
        &self,
        vehicle_year: i32,
        profile_id: &str,
        vehicle_price: Money,
        down_payment: Money,
        term_months: u32,
    ) -> Result<Option<SimulationResult>> {
        let menu = self.rate_menu(vehicle_year);
        if menu.is_empty() {
            return Err(SimulationError::MissingTaxBracket { vehicle_year });
        }

        let entry = menu
            .for_profile(profile_id)
            .ok_or_else(|| SimulationError::UnknownCreditProfile {
                id: profile_id.to_string(),
            })?;

        let request = SimulationRequest {
            vehicle_price,
            down_payment,
            term_months,
            annual_rate: entry.rate,
            fees: entry.fees.clone(),
        };
        request.validate(&self.config)?;

        Ok(self.engine.calculate(&request))
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}
