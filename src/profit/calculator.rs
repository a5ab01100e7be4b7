//! Profitability Calculator
//!
//! Combines nutrient classification, crop economics, the yield-penalty model,
//! and the cost model into a two-scenario profitability report:
//!
//! - **ideal soil**: baseline yield, no fertilizer remediation
//! - **actual soil**: penalty-adjusted yield plus remediation charges
//!
//! Internal computation keeps full precision; rounding to 2 decimals happens
//! once, at the report boundary.

use serde::Serialize;

use crate::crops::{profile, CropKey};
use crate::error::AdvisorError;
use crate::profit::cost::{
    amortize_establishment_cost, fertilizer_remediation_cost, scenario_total_cost,
};
use crate::profit::yield_model::adjust_yield;
use crate::soil::classify::NutrientAdvisory;
use crate::util::round2;

/// Ideal-vs-actual profitability comparison for one request.
///
/// Monetary fields are in ₹, rounded to 2 decimals. `break_even_price_₹_per_kg`
/// is null when the actual total yield is zero (no price can recover costs).
#[derive(Debug, Clone, Serialize)]
pub struct ProfitabilityReport {
    pub crop: String,

    #[serde(rename = "ideal_net_profit_per_ha_₹")]
    pub ideal_net_profit_per_ha: f64,

    #[serde(rename = "ideal_net_profit_total_₹")]
    pub ideal_net_profit_total: f64,

    #[serde(rename = "actual_net_profit_per_ha_₹")]
    pub actual_net_profit_per_ha: f64,

    #[serde(rename = "actual_net_profit_total_₹")]
    pub actual_net_profit_total: f64,

    #[serde(rename = "break_even_price_₹_per_kg")]
    pub break_even_price_per_kg: Option<f64>,

    /// 100 × (ideal − actual) / ideal, 2 decimals. Reported as 0.0 whenever
    /// ideal net profit is non-positive: a degenerate fallback that conflates
    /// "no reduction" with "undefined comparison", preserved as observable
    /// behavior.
    pub profit_reduction_pct: f64,
}

/// Compute the profitability comparison for a crop over a cultivated area.
///
/// `classification` is the per-nutrient soil status; `price_per_kg` the best
/// available mandi price. Fails with `InvalidArea` when `area_ha ≤ 0`.
pub fn calculate_profitability(
    crop: CropKey,
    area_ha: f64,
    classification: &[NutrientAdvisory],
    price_per_kg: f64,
) -> Result<ProfitabilityReport, AdvisorError> {
    if area_ha <= 0.0 {
        return Err(AdvisorError::InvalidArea { area_ha });
    }

    let base_yield = profile(crop).baseline_yield_kg_ha;
    let adjusted_yield = adjust_yield(base_yield, classification, crop);
    Ok(build_report(
        crop,
        area_ha,
        classification,
        price_per_kg,
        adjusted_yield,
    ))
}

/// Assemble the report from a pre-adjusted per-hectare yield.
fn build_report(
    crop: CropKey,
    area_ha: f64,
    classification: &[NutrientAdvisory],
    price_per_kg: f64,
    adjusted_yield: f64,
) -> ProfitabilityReport {
    let info = profile(crop);
    let annual_establishment = amortize_establishment_cost(crop, area_ha);
    let labour = info.labour_cost_per_ha * area_ha;

    // Ideal scenario: adequate soil, no remediation
    let ideal_total_yield = info.baseline_yield_kg_ha * area_ha;
    let ideal_revenue = ideal_total_yield * price_per_kg;
    let ideal_cost = scenario_total_cost(annual_establishment, labour, 0.0, ideal_revenue);
    let ideal_net = ideal_revenue - ideal_cost;

    // Actual scenario: penalty-adjusted yield, remediation charges
    let actual_total_yield = adjusted_yield * area_ha;
    let actual_revenue = actual_total_yield * price_per_kg;
    let fertilizer = fertilizer_remediation_cost(classification);
    let actual_cost = scenario_total_cost(annual_establishment, labour, fertilizer, actual_revenue);
    let actual_net = actual_revenue - actual_cost;

    let break_even = if actual_total_yield > 0.0 {
        Some(round2(actual_cost / actual_total_yield))
    } else {
        None
    };

    let profit_reduction_pct = if ideal_net > 0.0 {
        round2(100.0 * (ideal_net - actual_net) / ideal_net)
    } else {
        0.0
    };

    ProfitabilityReport {
        crop: crop.display_name().to_string(),
        ideal_net_profit_per_ha: round2(ideal_net / area_ha),
        ideal_net_profit_total: round2(ideal_net),
        actual_net_profit_per_ha: round2(actual_net / area_ha),
        actual_net_profit_total: round2(actual_net),
        break_even_price_per_kg: break_even,
        profit_reduction_pct,
    }
}
