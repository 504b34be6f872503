use crate::types::TaxBracket;

/// inclusive model-year range mapped to its bracket anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearBand {
    from: i32,
    to: i32,
    anchor: i32,
}

/// ordered newest first; the last band catches everything older
const YEAR_BANDS: &[YearBand] = &[
    YearBand { from: 2024, to: i32::MAX, anchor: 2024 },
    YearBand { from: 2023, to: 2023, anchor: 2023 },
    YearBand { from: 2022, to: 2022, anchor: 2022 },
    YearBand { from: 2021, to: 2021, anchor: 2021 },
    YearBand { from: 2016, to: 2020, anchor: 2020 },
    YearBand { from: 2010, to: 2015, anchor: 2015 },
    YearBand { from: i32::MIN, to: 2009, anchor: 2009 },
];

/// bracket anchor year for a vehicle model year
pub fn anchor_year(vehicle_year: i32) -> i32 {
    YEAR_BANDS
        .iter()
        .find(|band| vehicle_year >= band.from && vehicle_year <= band.to)
        .map(|band| band.anchor)
        .unwrap_or(2009)
}

/// resolve a vehicle model year to its base tax bracket
///
/// `None` when the anchor bracket is absent from the table (empty or
/// partial reference data); callers treat that as "no applicable rate"
pub fn resolve(vehicle_year: i32, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    let anchor = anchor_year(vehicle_year);
    brackets.iter().find(|bracket| bracket.vehicle_year == anchor)
}
