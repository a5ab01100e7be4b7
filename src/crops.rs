//! Static Crop Configuration
//!
//! Process-wide read-only tables for the supported crops: economic profiles,
//! crop-specific NPK threshold bands, yield-penalty fractions, and weather
//! tolerance bands. Initialized once as embedded statics, never mutated.

use crate::error::AdvisorError;

/// Supported crop keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKey {
    Rice,
    Coconut,
    Rubber,
}

impl CropKey {
    /// All supported crops, in table order.
    pub const ALL: [CropKey; 3] = [CropKey::Rice, CropKey::Coconut, CropKey::Rubber];

    /// Parse a case-insensitive crop name.
    pub fn parse(name: &str) -> Result<Self, AdvisorError> {
        match name.trim().to_lowercase().as_str() {
            "rice" => Ok(CropKey::Rice),
            "coconut" => Ok(CropKey::Coconut),
            "rubber" => Ok(CropKey::Rubber),
            _ => Err(AdvisorError::UnknownCrop {
                name: name.to_string(),
            }),
        }
    }

    /// Lowercase table key, as used in upstream market queries.
    pub fn key(&self) -> &'static str {
        match self {
            CropKey::Rice => "rice",
            CropKey::Coconut => "coconut",
            CropKey::Rubber => "rubber",
        }
    }

    /// Capitalized name for report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            CropKey::Rice => "Rice",
            CropKey::Coconut => "Coconut",
            CropKey::Rubber => "Rubber",
        }
    }
}

/// Primary soil macronutrients, in fixed classification order (N, P, K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// Classification iterates nutrients in this order, always.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }
}

// ============================================================================
// Economic Profiles
// ============================================================================

/// Static economic profile for one crop.
#[derive(Debug, Clone)]
pub struct CropProfile {
    /// Baseline yield under adequate soil (kg/ha)
    pub baseline_yield_kg_ha: f64,

    /// Seed or planting-material rate (kg/ha)
    pub seed_rate_kg_ha: f64,

    /// Seed unit cost (₹/kg)
    pub seed_cost_per_kg: f64,

    /// Productive lifespan in years. Annual crops have lifespan 1 and their
    /// establishment cost is fully expensed in the first year.
    pub lifespan_years: u32,

    /// One-time establishment cost beyond seed (₹/ha)
    pub establishment_extra_per_ha: f64,

    /// Annual labour cost (₹/ha)
    pub labour_cost_per_ha: f64,
}

static RICE: CropProfile = CropProfile {
    baseline_yield_kg_ha: 4000.0,
    seed_rate_kg_ha: 80.0,
    seed_cost_per_kg: 700.0,
    lifespan_years: 1,
    establishment_extra_per_ha: 0.0,
    labour_cost_per_ha: 48000.0,
};

static COCONUT: CropProfile = CropProfile {
    baseline_yield_kg_ha: 5500.0,
    seed_rate_kg_ha: 200.0,
    seed_cost_per_kg: 84.75,
    lifespan_years: 30,
    establishment_extra_per_ha: 20000.0,
    labour_cost_per_ha: 20000.0,
};

static RUBBER: CropProfile = CropProfile {
    baseline_yield_kg_ha: 1750.0,
    seed_rate_kg_ha: 460.0,
    seed_cost_per_kg: 75.0,
    lifespan_years: 25,
    establishment_extra_per_ha: 50000.0,
    labour_cost_per_ha: 150000.0,
};

/// Look up the static economic profile for a crop.
pub fn profile(crop: CropKey) -> &'static CropProfile {
    match crop {
        CropKey::Rice => &RICE,
        CropKey::Coconut => &COCONUT,
        CropKey::Rubber => &RUBBER,
    }
}

// ============================================================================
// NPK Threshold Bands
// ============================================================================

/// Crop-specific (low, high) band for one nutrient index.
///
/// Units are model-derived index points, not physical concentrations.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdBand {
    pub low: f64,
    pub high: f64,
}

/// Threshold band for a (crop, nutrient) pair.
pub fn nutrient_thresholds(crop: CropKey, nutrient: Nutrient) -> ThresholdBand {
    let (low, high) = match (crop, nutrient) {
        (CropKey::Rice, Nutrient::Nitrogen) => (280.0, 560.0),
        (CropKey::Rice, Nutrient::Phosphorus) => (10.0, 25.0),
        (CropKey::Rice, Nutrient::Potassium) => (100.0, 250.0),
        (CropKey::Coconut, Nutrient::Nitrogen) => (250.0, 400.0),
        (CropKey::Coconut, Nutrient::Phosphorus) => (8.0, 20.0),
        (CropKey::Coconut, Nutrient::Potassium) => (120.0, 300.0),
        (CropKey::Rubber, Nutrient::Nitrogen) => (200.0, 350.0),
        (CropKey::Rubber, Nutrient::Phosphorus) => (8.0, 18.0),
        (CropKey::Rubber, Nutrient::Potassium) => (150.0, 250.0),
    };
    ThresholdBand { low, high }
}

// ============================================================================
// Yield Penalty Table
// ============================================================================

/// Fractional yield drop for a deficient (low) or excessive (high) nutrient.
///
/// Only `low_drop` is applied by the yield model; `high_drop` is reserved
/// pending an agronomic decision on excess-nutrient penalties.
#[derive(Debug, Clone, Copy)]
pub struct YieldPenalty {
    /// Applied per LOW classification, multiplicatively: yield *= 1 - low_drop
    pub low_drop: f64,

    /// Reserved upper bound of the drop range; currently unapplied.
    pub high_drop: f64,
}

/// Yield penalty fractions for a (crop, nutrient) pair.
pub fn yield_penalty(crop: CropKey, nutrient: Nutrient) -> YieldPenalty {
    let (low_drop, high_drop) = match (crop, nutrient) {
        (CropKey::Rice, Nutrient::Nitrogen) => (0.05, 0.12),
        (CropKey::Rice, Nutrient::Phosphorus) => (0.03, 0.07),
        (CropKey::Rice, Nutrient::Potassium) => (0.04, 0.08),
        (CropKey::Coconut, Nutrient::Nitrogen) => (0.04, 0.08),
        (CropKey::Coconut, Nutrient::Phosphorus) => (0.02, 0.05),
        (CropKey::Coconut, Nutrient::Potassium) => (0.06, 0.12),
        (CropKey::Rubber, Nutrient::Nitrogen) => (0.03, 0.07),
        (CropKey::Rubber, Nutrient::Phosphorus) => (0.02, 0.04),
        (CropKey::Rubber, Nutrient::Potassium) => (0.05, 0.10),
    };
    YieldPenalty { low_drop, high_drop }
}

// ============================================================================
// Weather Tolerance Bands
// ============================================================================

/// Sowing-window weather tolerances for one crop.
#[derive(Debug, Clone, Copy)]
pub struct WeatherTolerance {
    /// Minimum average temperature for sowing (°C)
    pub temp_min_c: f64,

    /// Maximum average temperature before heat stress (°C)
    pub temp_max_c: f64,

    /// Daily rainfall above which field work should be postponed (mm)
    pub rain_max_mm: f64,
}

/// Weather tolerance band for a crop.
pub fn weather_tolerance(crop: CropKey) -> WeatherTolerance {
    match crop {
        CropKey::Rice => WeatherTolerance {
            temp_min_c: 20.0,
            temp_max_c: 35.0,
            rain_max_mm: 30.0,
        },
        CropKey::Coconut => WeatherTolerance {
            temp_min_c: 20.0,
            temp_max_c: 35.0,
            rain_max_mm: 40.0,
        },
        CropKey::Rubber => WeatherTolerance {
            temp_min_c: 25.0,
            temp_max_c: 35.0,
            rain_max_mm: 35.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(CropKey::parse("rice").unwrap(), CropKey::Rice);
        assert_eq!(CropKey::parse("Coconut").unwrap(), CropKey::Coconut);
        assert_eq!(CropKey::parse("  RUBBER ").unwrap(), CropKey::Rubber);
    }

    #[test]
    fn test_parse_unknown_crop() {
        let err = CropKey::parse("wheat").unwrap_err();
        assert!(err.to_string().contains("wheat"));
    }

    #[test]
    fn test_profile_values() {
        let rice = profile(CropKey::Rice);
        assert_eq!(rice.baseline_yield_kg_ha, 4000.0);
        assert_eq!(rice.lifespan_years, 1);

        let coconut = profile(CropKey::Coconut);
        assert_eq!(coconut.seed_cost_per_kg, 84.75);
        assert_eq!(coconut.lifespan_years, 30);

        let rubber = profile(CropKey::Rubber);
        assert_eq!(rubber.labour_cost_per_ha, 150000.0);
    }

    #[test]
    fn test_threshold_bands_ordered() {
        for crop in CropKey::ALL {
            for nutrient in Nutrient::ALL {
                let band = nutrient_thresholds(crop, nutrient);
                assert!(band.low < band.high, "{:?}/{:?}", crop, nutrient);
            }
        }
    }

    #[test]
    fn test_penalty_fractions_below_one() {
        for crop in CropKey::ALL {
            for nutrient in Nutrient::ALL {
                let penalty = yield_penalty(crop, nutrient);
                assert!(penalty.low_drop > 0.0 && penalty.low_drop < 1.0);
                assert!(penalty.high_drop >= penalty.low_drop);
            }
        }
    }
}
