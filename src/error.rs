//! Error Taxonomy
//!
//! Provider calls fail with `Upstream`; the orchestration layer recovers
//! the ones it can (a single district fetch failing mid-scan, a missing
//! soil reading) by logging and degrading, and surfaces the rest to the
//! caller alongside the validation errors.

use thiserror::Error;

/// Errors surfaced by the advisory entry points.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Crop key is not in the static crop tables.
    #[error("Unknown crop '{name}' (supported: rice, coconut, rubber)")]
    UnknownCrop { name: String },

    /// Cultivated area must be strictly positive.
    #[error("Invalid cultivated area: {area_ha} ha (must be > 0)")]
    InvalidArea { area_ha: f64 },

    /// No district in the configured region list produced a price quote.
    /// Profitability cannot be computed without a price.
    #[error("No price data available for {commodity} right now.")]
    NoPriceData { commodity: String },

    /// An upstream fetch failed in a context where it cannot be recovered.
    #[error("Upstream fetch failed: {0}")]
    Upstream(#[from] anyhow::Error),
}
