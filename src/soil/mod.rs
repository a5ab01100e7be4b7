//! Soil Module
//!
//! Soil-derived nutrient estimation and classification:
//! - `indices.rs` - SoilSample descaling + NPK index estimation
//! - `classify.rs` - crop-specific LOW/OPTIMAL/HIGH banding with advisory text

pub mod classify;
pub mod indices;

pub use classify::{classify_npk, NutrientAdvisory, NutrientStatus, LOW_TOLERANCE_FACTOR};
pub use indices::{estimate_npk, NutrientIndices, SoilSample};

use serde::Serialize;

use crate::crops::CropKey;

/// Soil fertility report: the LOW advisories that call for fertilizer.
///
/// When the upstream soil fetch fails entirely the report degrades to an
/// explicit no-data message instead of alerts computed over a zero sample.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    pub crop: String,

    pub soil_alerts: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SoilReport {
    /// Build the report from a classification, keeping LOW advisories only.
    pub fn from_classification(crop: CropKey, classification: &[NutrientAdvisory]) -> Self {
        Self {
            crop: crop.display_name().to_string(),
            soil_alerts: classification
                .iter()
                .filter(|a| a.is_low())
                .map(|a| a.advisory())
                .collect(),
            message: None,
        }
    }

    /// Degraded report for a failed or empty soil fetch.
    pub fn unavailable(crop: CropKey) -> Self {
        Self {
            crop: crop.display_name().to_string(),
            soil_alerts: Vec::new(),
            message: Some("No soil data available".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crops::{Nutrient, CropKey};

    #[test]
    fn test_report_keeps_low_alerts_only() {
        let classification = [
            NutrientAdvisory {
                nutrient: Nutrient::Nitrogen,
                status: NutrientStatus::Low,
            },
            NutrientAdvisory {
                nutrient: Nutrient::Phosphorus,
                status: NutrientStatus::Optimal,
            },
            NutrientAdvisory {
                nutrient: Nutrient::Potassium,
                status: NutrientStatus::High,
            },
        ];
        let report = SoilReport::from_classification(CropKey::Rice, &classification);
        assert_eq!(report.crop, "Rice");
        assert_eq!(report.soil_alerts, vec!["Nitrogen LOW → Apply fertilizer"]);
        assert!(report.message.is_none());
    }

    #[test]
    fn test_unavailable_report_shape() {
        let report = SoilReport::unavailable(CropKey::Rubber);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["crop"], "Rubber");
        assert_eq!(json["message"], "No soil data available");
        assert!(json["soil_alerts"].as_array().unwrap().is_empty());
    }
}
