use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::types::{CreditProfile, Fee, TaxBracket};

/// tax-rate variant produced by applying one credit profile's adjustment
/// to a resolved base bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedRate {
    pub id: u32,
    pub bracket_id: u32,
    /// stable selection key; display strings are never matched against
    pub profile_id: String,
    pub vehicle_year: i32,
    pub year_range: String,
    pub description: String,
    pub rate: Rate,
    pub fees: Vec<Fee>,
}

/// credit-adjusted percentage, clamped to the floor no matter how negative
/// the adjustment is
pub fn adjusted_rate(base: Rate, adjustment: Decimal, floor_percentage: Decimal) -> Rate {
    let adjusted = base.as_percentage() + adjustment;
    Rate::from_percentage(adjusted.max(floor_percentage))
}

/// the full set of adjusted variants for one resolved bracket, one per
/// credit profile in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateMenu {
    entries: Vec<AdjustedRate>,
}

impl RateMenu {
    pub fn build(bracket: &TaxBracket, profiles: &[CreditProfile], floor_percentage: Decimal) -> Self {
        let entries = profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| AdjustedRate {
                id: bracket.id + (index as u32) * 100,
                bracket_id: bracket.id,
                profile_id: profile.id.clone(),
                vehicle_year: bracket.vehicle_year,
                year_range: format!("{} - {}", bracket.year_range, profile.name),
                description: format!("{} - {}", bracket.description, profile.name),
                rate: adjusted_rate(bracket.base_rate, profile.rate_adjustment, floor_percentage),
                fees: bracket.fees.clone(),
            })
            .collect();

        Self { entries }
    }

    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entries(&self) -> &[AdjustedRate] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// select the variant for a credit profile by its stable id
    pub fn for_profile(&self, profile_id: &str) -> Option<&AdjustedRate> {
        self.entries.iter().find(|entry| entry.profile_id == profile_id)
    }
}

/// profile preselected before the user picks one: the first zero-adjustment
/// tier, else the first profile, else none
pub fn default_profile(profiles: &[CreditProfile]) -> Option<&CreditProfile> {
    profiles
        .iter()
        .find(|profile| profile.rate_adjustment.is_zero())
        .or_else(|| profiles.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{base_tax_brackets, credit_profiles};
    use rust_decimal_macros::dec;

    const FLOOR: Decimal = dec!(0.1);

    fn bracket_2024() -> TaxBracket {
        base_tax_brackets().into_iter().find(|b| b.vehicle_year == 2024).unwrap()
    }

    #[test]
    fn test_adjusted_rate_scenarios() {
        // excellent credit against the new-vehicle bracket
        let rate = adjusted_rate(Rate::from_percentage(dec!(12.5)), dec!(-1.5), FLOOR);
        assert_eq!(rate.as_percentage(), dec!(11.0));

        // poor credit against the used-vehicle bracket
        let rate = adjusted_rate(Rate::from_percentage(dec!(9.8)), dec!(5.0), FLOOR);
        assert_eq!(rate.as_percentage(), dec!(14.8));

        // zero adjustment leaves the base untouched
        let rate = adjusted_rate(Rate::from_percentage(dec!(11.2)), dec!(0), FLOOR);
        assert_eq!(rate.as_percentage(), dec!(11.2));
    }

    #[test]
    fn test_adjustment_never_breaks_the_floor() {
        let rate = adjusted_rate(Rate::from_percentage(dec!(7.5)), dec!(-50.0), FLOOR);
        assert_eq!(rate.as_percentage(), FLOOR);
    }

    #[test]
    fn test_menu_one_entry_per_profile() {
        let bracket = bracket_2024();
        let profiles = credit_profiles();
        let menu = RateMenu::build(&bracket, &profiles, FLOOR);

        assert_eq!(menu.len(), profiles.len());
        for (index, (entry, profile)) in menu.entries().iter().zip(&profiles).enumerate() {
            assert_eq!(entry.id, bracket.id + (index as u32) * 100);
            assert_eq!(entry.bracket_id, bracket.id);
            assert_eq!(entry.profile_id, profile.id);
            assert_eq!(entry.fees, bracket.fees);
            assert!(entry.description.contains(&profile.name));
        }
    }

    #[test]
    fn test_menu_selection_by_profile_id() {
        let menu = RateMenu::build(&bracket_2024(), &credit_profiles(), FLOOR);

        let entry = menu.for_profile("excellent").unwrap();
        assert_eq!(entry.rate.as_percentage(), dec!(11.0));

        let entry = menu.for_profile("poor").unwrap();
        assert_eq!(entry.rate.as_percentage(), dec!(17.5));

        assert!(menu.for_profile("platinum").is_none());
    }

    #[test]
    fn test_selection_survives_overlapping_profile_names() {
        // name-substring matching would pick the wrong entry here; id
        // matching must not
        let profiles = vec![
            CreditProfile {
                id: "good".to_string(),
                name: "Good Credit".to_string(),
                description: "680-749 FICO Score".to_string(),
                rate_adjustment: dec!(0),
            },
            CreditProfile {
                id: "very-good".to_string(),
                name: "Very Good Credit".to_string(),
                description: "720-749 FICO Score".to_string(),
                rate_adjustment: dec!(-0.5),
            },
        ];
        let menu = RateMenu::build(&bracket_2024(), &profiles, FLOOR);

        let entry = menu.for_profile("very-good").unwrap();
        assert_eq!(entry.rate.as_percentage(), dec!(12.0));
        assert_eq!(menu.for_profile("good").unwrap().rate.as_percentage(), dec!(12.5));
    }

    #[test]
    fn test_menu_for_empty_profile_catalog() {
        let menu = RateMenu::build(&bracket_2024(), &[], FLOOR);
        assert!(menu.is_empty());
        assert!(menu.for_profile("good").is_none());
    }

    #[test]
    fn test_default_profile_prefers_zero_adjustment() {
        let profiles = credit_profiles();
        assert_eq!(default_profile(&profiles).unwrap().id, "good");
    }

    #[test]
    fn test_default_profile_falls_back_to_first() {
        let profiles: Vec<_> = credit_profiles()
            .into_iter()
            .filter(|profile| !profile.rate_adjustment.is_zero())
            .collect();
        assert_eq!(default_profile(&profiles).unwrap().id, "excellent");
    }

    #[test]
    fn test_default_profile_empty_catalog() {
        assert!(default_profile(&[]).is_none());
    }
}
