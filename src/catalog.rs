use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::types::{CreditProfile, Fee, TaxBracket};

/// reference data consumed by the simulator: the base tax table and the
/// ordered credit tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub brackets: Vec<TaxBracket>,
    pub profiles: Vec<CreditProfile>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            brackets: base_tax_brackets(),
            profiles: credit_profiles(),
        }
    }
}

impl Catalog {
    pub fn new(brackets: Vec<TaxBracket>, profiles: Vec<CreditProfile>) -> Self {
        Self { brackets, profiles }
    }

    /// catalog with no reference data; menus and defaults degrade to empty
    pub fn empty() -> Self {
        Self {
            brackets: Vec::new(),
            profiles: Vec::new(),
        }
    }

    pub fn bracket_for_anchor(&self, anchor_year: i32) -> Option<&TaxBracket> {
        self.brackets.iter().find(|bracket| bracket.vehicle_year == anchor_year)
    }

    pub fn profile(&self, id: &str) -> Option<&CreditProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// the ordered credit tiers, best to worst
pub fn credit_profiles() -> Vec<CreditProfile> {
    vec![
        CreditProfile {
            id: "excellent".to_string(),
            name: "Excellent Credit".to_string(),
            description: "750+ FICO Score".to_string(),
            rate_adjustment: dec!(-1.5),
        },
        CreditProfile {
            id: "good".to_string(),
            name: "Good Credit".to_string(),
            description: "680-749 FICO Score".to_string(),
            rate_adjustment: dec!(0),
        },
        CreditProfile {
            id: "fair".to_string(),
            name: "Fair Credit".to_string(),
            description: "580-679 FICO Score".to_string(),
            rate_adjustment: dec!(2.5),
        },
        CreditProfile {
            id: "poor".to_string(),
            name: "Poor Credit".to_string(),
            description: "500-579 FICO Score".to_string(),
            rate_adjustment: dec!(5.0),
        },
    ]
}

/// base tax table keyed by vehicle-year anchors; the banded anchors (2020,
/// 2015, 2009) cover the year ranges the resolver maps onto them
pub fn base_tax_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            id: 1,
            vehicle_year: 2024,
            year_range: "2024 (New)".to_string(),
            description: "0km Vehicles - Standard rate for new vehicles".to_string(),
            base_rate: Rate::from_percentage(dec!(12.5)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Registration Fee", dec!(35.55)),
            ],
        },
        TaxBracket {
            id: 2,
            vehicle_year: 2023,
            year_range: "2023 (Semi-new)".to_string(),
            description: "1 year old vehicles - Small depreciation applied".to_string(),
            base_rate: Rate::from_percentage(dec!(11.8)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Inspection", dec!(15.51)),
            ],
        },
        TaxBracket {
            id: 3,
            vehicle_year: 2022,
            year_range: "2022 (Semi-new)".to_string(),
            description: "2 year old vehicles - Reduced rate due to depreciation".to_string(),
            base_rate: Rate::from_percentage(dec!(11.2)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Inspection", dec!(15.51)),
            ],
        },
        TaxBracket {
            id: 4,
            vehicle_year: 2021,
            year_range: "2021 (Semi-new)".to_string(),
            description: "3 year old vehicles - Reduced rate".to_string(),
            base_rate: Rate::from_percentage(dec!(10.5)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Inspection", dec!(15.51)),
            ],
        },
        TaxBracket {
            id: 5,
            vehicle_year: 2020,
            year_range: "2016-2020 (Used)".to_string(),
            description: "4-8 year old vehicles - Used vehicle rate".to_string(),
            base_rate: Rate::from_percentage(dec!(9.8)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Complete Inspection", dec!(22.87)),
                Fee::fixed("Technical Report", dec!(17.27)),
            ],
        },
        TaxBracket {
            id: 6,
            vehicle_year: 2015,
            year_range: "2010-2015 (Used)".to_string(),
            description: "9-14 year old vehicles - Reduced rate for older used cars".to_string(),
            base_rate: Rate::from_percentage(dec!(8.9)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Complete Inspection", dec!(22.87)),
                Fee::fixed("Technical Report", dec!(17.27)),
                Fee::fixed("Additional Inspection", dec!(75.00)),
            ],
        },
        TaxBracket {
            id: 7,
            vehicle_year: 2009,
            year_range: "Up to 2009 (Old)".to_string(),
            description: "15+ year old vehicles - Minimum rate for old vehicles".to_string(),
            base_rate: Rate::from_percentage(dec!(7.5)),
            fees: vec![
                Fee::percentage("IPVA", dec!(4.0)),
                Fee::fixed("Mandatory Insurance", dec!(28.77)),
                Fee::fixed("Licensing Fee", dec!(23.22)),
                Fee::fixed("Rigorous Inspection", dec!(185.50)),
                Fee::fixed("Complete Technical Report", dec!(150.00)),
                Fee::fixed("Vehicle Inspection", dec!(17.27)),
            ],
        },
    ]
}
