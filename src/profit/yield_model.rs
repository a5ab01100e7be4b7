//! Yield Adjustment Model
//!
//! Converts nutrient deficiencies into a multiplicative yield-penalty factor.
//! Each LOW classification multiplies the factor by (1 - low_drop) for the
//! matching nutrient, so simultaneous deficiencies compound multiplicatively:
//! two 10% drops give a 19% combined drop, not 20%. HIGH excess carries a
//! reserved penalty bound that is not applied here.

use crate::crops::{yield_penalty, CropKey};
use crate::soil::classify::NutrientAdvisory;

/// Apply the crop's yield penalties for every LOW nutrient.
///
/// Table fractions are all below 1, so the factor stays in (0, 1] and the
/// result is never negative.
pub fn adjust_yield(base_yield: f64, classification: &[NutrientAdvisory], crop: CropKey) -> f64 {
    let mut factor = 1.0;
    for advisory in classification {
        if advisory.is_low() {
            factor *= 1.0 - yield_penalty(crop, advisory.nutrient).low_drop;
        }
    }
    base_yield * factor
}
