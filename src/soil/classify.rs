//! Nutrient Classifier
//!
//! Maps NPK availability indices to a categorical status per nutrient using
//! crop-specific threshold bands. The low bound carries an asymmetric 8%
//! tolerance buffer: a value must fall below 0.92 × low before it is flagged
//! LOW, which avoids fertilizer advisories for borderline soils. The high
//! bound has no such buffer.

use crate::crops::{nutrient_thresholds, CropKey, Nutrient, ThresholdBand};
use crate::soil::indices::NutrientIndices;

/// Tolerance factor applied to the low bound before flagging LOW.
pub const LOW_TOLERANCE_FACTOR: f64 = 0.92;

/// Categorical status of one nutrient relative to its crop band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientStatus {
    /// Below the tolerance-buffered low bound; remediation advised
    Low,
    /// Within the band (including the tolerance buffer)
    Optimal,
    /// Above the high bound
    High,
}

impl NutrientStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            NutrientStatus::Low => "LOW",
            NutrientStatus::Optimal => "OPTIMAL",
            NutrientStatus::High => "HIGH",
        }
    }
}

/// Classification of one nutrient, carrying its advisory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientAdvisory {
    pub nutrient: Nutrient,
    pub status: NutrientStatus,
}

impl NutrientAdvisory {
    /// Human-readable advisory string. LOW advisories carry the fertilizer
    /// call-to-action; the exact wording is part of the report contract.
    pub fn advisory(&self) -> String {
        match self.status {
            NutrientStatus::Low => {
                format!("{} LOW → Apply fertilizer", self.nutrient.display_name())
            }
            NutrientStatus::Optimal => format!("{} OPTIMAL", self.nutrient.display_name()),
            NutrientStatus::High => format!("{} HIGH", self.nutrient.display_name()),
        }
    }

    pub fn is_low(&self) -> bool {
        self.status == NutrientStatus::Low
    }
}

/// Classify one index value against a threshold band.
pub fn classify_value(value: f64, band: ThresholdBand) -> NutrientStatus {
    let low_tolerance = band.low * LOW_TOLERANCE_FACTOR;
    if value < low_tolerance {
        NutrientStatus::Low
    } else if value > band.high {
        NutrientStatus::High
    } else {
        NutrientStatus::Optimal
    }
}

/// Classify all three nutrients for a crop, in fixed N, P, K order.
///
/// Pure and deterministic: the same indices always produce the same
/// classification sequence.
pub fn classify_npk(indices: &NutrientIndices, crop: CropKey) -> [NutrientAdvisory; 3] {
    Nutrient::ALL.map(|nutrient| NutrientAdvisory {
        nutrient,
        status: classify_value(indices.value(nutrient), nutrient_thresholds(crop, nutrient)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(n: f64, p: f64, k: f64) -> NutrientIndices {
        NutrientIndices { n, p, k }
    }

    #[test]
    fn test_fixed_nutrient_order() {
        let result = classify_npk(&indices(300.0, 15.0, 150.0), CropKey::Rice);
        assert_eq!(result[0].nutrient, Nutrient::Nitrogen);
        assert_eq!(result[1].nutrient, Nutrient::Phosphorus);
        assert_eq!(result[2].nutrient, Nutrient::Potassium);
    }

    #[test]
    fn test_all_optimal_within_band() {
        let result = classify_npk(&indices(300.0, 15.0, 150.0), CropKey::Rice);
        assert!(result.iter().all(|a| a.status == NutrientStatus::Optimal));
    }

    #[test]
    fn test_low_tolerance_boundary() {
        // Rice N low bound = 280, tolerance = 257.6
        let band = nutrient_thresholds(CropKey::Rice, Nutrient::Nitrogen);
        assert_eq!(classify_value(257.6, band), NutrientStatus::Optimal);
        assert_eq!(classify_value(257.59, band), NutrientStatus::Low);
        // A value between tolerance and low bound is not flagged
        assert_eq!(classify_value(270.0, band), NutrientStatus::Optimal);
    }

    #[test]
    fn test_high_bound_has_no_buffer() {
        // Rice N high bound = 560
        let band = nutrient_thresholds(CropKey::Rice, Nutrient::Nitrogen);
        assert_eq!(classify_value(560.0, band), NutrientStatus::Optimal);
        assert_eq!(classify_value(560.01, band), NutrientStatus::High);
    }

    #[test]
    fn test_crop_specific_bands() {
        // 220 index points: LOW for rice N (tol 257.6), OPTIMAL for rubber N (tol 184)
        let rice = classify_npk(&indices(220.0, 15.0, 150.0), CropKey::Rice);
        let rubber = classify_npk(&indices(220.0, 15.0, 200.0), CropKey::Rubber);
        assert_eq!(rice[0].status, NutrientStatus::Low);
        assert_eq!(rubber[0].status, NutrientStatus::Optimal);
    }

    #[test]
    fn test_advisory_strings() {
        let low = NutrientAdvisory {
            nutrient: Nutrient::Nitrogen,
            status: NutrientStatus::Low,
        };
        assert_eq!(low.advisory(), "Nitrogen LOW → Apply fertilizer");

        let optimal = NutrientAdvisory {
            nutrient: Nutrient::Phosphorus,
            status: NutrientStatus::Optimal,
        };
        assert_eq!(optimal.advisory(), "Phosphorus OPTIMAL");

        let high = NutrientAdvisory {
            nutrient: Nutrient::Potassium,
            status: NutrientStatus::High,
        };
        assert_eq!(high.advisory(), "Potassium HIGH");
    }

    #[test]
    fn test_zero_indices_flag_all_low() {
        let result = classify_npk(&indices(0.0, 0.0, 0.0), CropKey::Coconut);
        assert!(result.iter().all(|a| a.is_low()));
    }
}
