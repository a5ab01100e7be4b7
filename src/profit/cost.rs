//! Cost Model
//!
//! Amortized establishment cost, fertilizer remediation, and scenario cost
//! totals. A scenario's total cost is:
//!
//!   amortized establishment + fertilizer + labour + 5% of revenue (misc)
//!
//! The ideal-soil scenario carries zero fertilizer cost; the actual-soil
//! scenario adds a flat remediation charge per LOW nutrient flag.

use crate::crops::{profile, CropKey, Nutrient};
use crate::soil::classify::NutrientAdvisory;

/// Miscellaneous overhead as a fraction of scenario revenue.
pub const MISC_OVERHEAD_RATE: f64 = 0.05;

/// Flat remediation charge for a nitrogen deficiency (₹).
pub const NITROGEN_REMEDIATION: f64 = 2000.0;

/// Flat remediation charge for any other nutrient deficiency (₹).
pub const OTHER_REMEDIATION: f64 = 1500.0;

/// Establishment cost for the cultivated area, amortized over the crop's
/// lifespan. Annual crops (lifespan ≤ 1) expense the full amount undivided.
pub fn amortize_establishment_cost(crop: CropKey, area_ha: f64) -> f64 {
    let info = profile(crop);
    let one_time = info.seed_rate_kg_ha * info.seed_cost_per_kg * area_ha
        + info.establishment_extra_per_ha * area_ha;
    if info.lifespan_years <= 1 {
        one_time
    } else {
        one_time / info.lifespan_years as f64
    }
}

/// Fertilizer remediation cost for the actual-soil scenario.
///
/// Flat per LOW flag (₹2000 for nitrogen, ₹1500 otherwise), summed across
/// flags and deliberately not scaled by area.
pub fn fertilizer_remediation_cost(classification: &[NutrientAdvisory]) -> f64 {
    classification
        .iter()
        .filter(|a| a.is_low())
        .map(|a| match a.nutrient {
            Nutrient::Nitrogen => NITROGEN_REMEDIATION,
            _ => OTHER_REMEDIATION,
        })
        .sum()
}

/// Total cost of one scenario.
pub fn scenario_total_cost(
    annual_establishment: f64,
    labour: f64,
    fertilizer: f64,
    revenue: f64,
) -> f64 {
    annual_establishment + fertilizer + labour + MISC_OVERHEAD_RATE * revenue
}
