//! Soil Sample and NPK Index Estimation
//!
//! Converts the raw soil payload into physical units and derives the three
//! nutrient availability indices from soil properties. The indices are
//! model-derived proxies, not measured concentrations; they carry no inherent
//! upper bound and are only interpreted through the crop threshold bands.

use crate::crops::Nutrient;
use crate::providers::SoilPayload;

/// Soil properties in working units, zero-defaulted when absent upstream.
#[derive(Debug, Clone, Default)]
pub struct SoilSample {
    /// Soil pH (H2O)
    pub ph: f64,

    /// Organic carbon (g/kg)
    pub organic_carbon_gkg: f64,

    /// Cation exchange capacity (cmol/kg)
    pub cec: f64,

    /// Clay content (%)
    pub clay_pct: f64,

    /// Bulk density (g/cm³)
    pub bulk_density_gcm3: f64,

    /// Total nitrogen (g/kg)
    pub n_total_gkg: f64,
}

impl SoilSample {
    /// Descale a raw payload into working units.
    ///
    /// The upstream API encodes organicCarbon and clayContent ×10,
    /// bulkDensity and nitrogen ×100. Missing fields become 0.
    pub fn from_payload(payload: &SoilPayload) -> Self {
        Self {
            ph: payload.ph.unwrap_or(0.0),
            organic_carbon_gkg: payload.organic_carbon.map(|v| v / 10.0).unwrap_or(0.0),
            cec: payload.cec.unwrap_or(0.0),
            clay_pct: payload.clay_content.map(|v| v / 10.0).unwrap_or(0.0),
            bulk_density_gcm3: payload.bulk_density.map(|v| v / 100.0).unwrap_or(0.0),
            n_total_gkg: payload.nitrogen.map(|v| v / 100.0).unwrap_or(0.0),
        }
    }
}

/// Model-derived N/P/K availability indices for one soil sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientIndices {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NutrientIndices {
    /// Index value for one nutrient.
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }
}

/// Estimate NPK availability indices from soil properties.
///
/// - N: 3% of total nitrogen is plant-available in a season (g/kg → kg/ha scale)
/// - P: weighted blend of organic carbon, pH proximity to 6.5, and clay
/// - K: weighted blend of CEC and clay
pub fn estimate_npk(sample: &SoilSample) -> NutrientIndices {
    let n = 0.03 * sample.n_total_gkg * 1000.0;
    let p = 0.4 * sample.organic_carbon_gkg
        + 0.6 * (7.0 - (sample.ph - 6.5).abs()).max(0.0)
        + 0.2 * sample.clay_pct;
    let k = 0.7 * sample.cec + 0.3 * sample.clay_pct;
    NutrientIndices { n, p, k }
}
