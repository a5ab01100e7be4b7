//! Crop Advisor Rust Implementation
//!
//! Decision-support pipeline for smallholder agriculture: given a location,
//! crop, and cultivated area, fuses soil-nutrient status, crop-price trends
//! across regional mandis, and weather conditions into actionable reports.
//!
//! Module layout:
//! - `crops`: static per-crop configuration tables
//! - `soil/`: NPK index estimation and nutrient classification
//! - `market/`: mandi scan, price trends, best-mandi selection
//! - `weather/`: daily snapshot and sowing/harvest advice
//! - `profit/`: the profitability engine (yield penalties, costs, break-even)
//! - `providers`: upstream data contracts and in-memory fixtures
//! - `advisor`: per-request orchestration entry points

pub mod advisor;
pub mod crops;
pub mod error;
pub mod market;
pub mod profit;
pub mod providers;
pub mod soil;
pub mod util;
pub mod weather;

// Re-export commonly used types
pub use advisor::{profitability_recommendation, soil_recommendation, weather_recommendation};
pub use crops::{CropKey, CropProfile, Nutrient};
pub use error::AdvisorError;
pub use market::{market_recommendation, MandiQuote, MarketReport};
pub use profit::{calculate_profitability, ProfitabilityReport};
pub use soil::{NutrientAdvisory, NutrientIndices, NutrientStatus, SoilReport, SoilSample};
pub use weather::{WeatherReport, WeatherSnapshot};
