//! External Data Contracts
//!
//! Raw payload shapes returned by the three upstream collaborators (soil,
//! market, weather) and the provider traits the orchestration layer consumes.
//! The HTTP fetchers themselves are out of scope; callers implement the
//! traits over whatever transport they use. Each call is expected to be a
//! sequential blocking call with its own timeout (`*_FETCH_TIMEOUT_SECS`);
//! there is no overall request-level budget or retry policy.

use anyhow::anyhow;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::AdvisorError;

/// Per-call timeout for soil and weather fetches (seconds).
pub const SOIL_FETCH_TIMEOUT_SECS: u64 = 10;

/// Per-call timeout for a single district market fetch (seconds).
pub const MARKET_FETCH_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// Raw Payload Shapes
// ============================================================================

/// Raw soil properties as returned by the soil-data API.
///
/// Several fields arrive in scaled integer units (organicCarbon ×10,
/// clayContent ×10, bulkDensity ×100, nitrogen ×100); `SoilSample` applies
/// the descaling. Missing fields default to zero downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoilPayload {
    #[serde(rename = "pH")]
    pub ph: Option<f64>,

    #[serde(rename = "organicCarbon")]
    pub organic_carbon: Option<f64>,

    #[serde(rename = "CEC")]
    pub cec: Option<f64>,

    #[serde(rename = "clayContent")]
    pub clay_content: Option<f64>,

    #[serde(rename = "bulkDensity")]
    pub bulk_density: Option<f64>,

    #[serde(rename = "nitrogen")]
    pub nitrogen: Option<f64>,
}

/// One raw mandi price record for a district.
#[derive(Debug, Clone, Deserialize)]
pub struct MandiPriceRecord {
    pub district: String,

    /// Arrival date in `%d/%m/%Y` format
    #[serde(rename = "arrivalDate")]
    pub arrival_date: String,

    /// Wholesale price in ₹ per quintal (100 kg)
    pub price: f64,
}

impl MandiPriceRecord {
    pub fn new(district: &str, arrival_date: &str, price: f64) -> Self {
        Self {
            district: district.to_string(),
            arrival_date: arrival_date.to_string(),
            price,
        }
    }
}

/// Raw daily weather observation as returned by the weather-data API.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    #[serde(rename = "weatherDescription")]
    pub weather_description: Option<String>,

    #[serde(rename = "maxTemperature")]
    pub max_temperature: f64,

    #[serde(rename = "minTemperature")]
    pub min_temperature: f64,

    #[serde(rename = "precipitationSum")]
    pub precipitation_sum: Option<f64>,

    pub sunrise: Option<String>,

    pub sunset: Option<String>,

    #[serde(rename = "annualRainfall")]
    pub annual_rainfall: Option<f64>,
}

// ============================================================================
// Provider Traits
// ============================================================================

/// Soil-data collaborator. `Ok(None)` signals an empty/absent response body;
/// transport failures surface as `AdvisorError::Upstream`.
pub trait SoilProvider {
    fn fetch_soil(&self, lat: f64, lon: f64) -> Result<Option<SoilPayload>, AdvisorError>;
}

/// Market-price collaborator, queried once per (commodity, district) pair.
///
/// An `Upstream` error from one district is recovered locally by the scan
/// and never aborts the overall computation; an empty `Vec` means the
/// district has no data for the commodity.
pub trait MarketProvider {
    fn fetch_prices(
        &self,
        commodity: &str,
        district: &str,
    ) -> Result<Vec<MandiPriceRecord>, AdvisorError>;
}

/// Weather collaborator.
pub trait WeatherProvider {
    fn fetch_weather(&self, lat: f64, lon: f64) -> Result<Option<WeatherPayload>, AdvisorError>;

    /// Active weather alert text, or "No alerts" when none are issued.
    fn fetch_alerts(&self, lat: f64, lon: f64) -> Result<String, AdvisorError>;
}

// ============================================================================
// In-Memory Fixtures
// ============================================================================
//
// Canned providers for prototype validation and tests, in the same spirit as
// hardcoded test locations: deterministic inputs for exercising the full
// advisory pipeline without a live upstream.

/// In-memory soil provider.
#[derive(Debug, Default)]
pub struct InMemorySoil {
    pub payload: Option<SoilPayload>,

    /// Simulate a failed fetch (connection refused, timeout, bad body).
    pub fail: bool,
}

impl SoilProvider for InMemorySoil {
    fn fetch_soil(&self, _lat: f64, _lon: f64) -> Result<Option<SoilPayload>, AdvisorError> {
        if self.fail {
            return Err(anyhow!("soil-data fetch failed").into());
        }
        Ok(self.payload.clone())
    }
}

/// In-memory market provider keyed by district name.
#[derive(Debug, Default)]
pub struct InMemoryMarket {
    /// district → raw price records for the fixture commodity
    pub prices: FxHashMap<String, Vec<MandiPriceRecord>>,

    /// Districts whose fetch should fail outright.
    pub outages: Vec<String>,
}

impl MarketProvider for InMemoryMarket {
    fn fetch_prices(
        &self,
        _commodity: &str,
        district: &str,
    ) -> Result<Vec<MandiPriceRecord>, AdvisorError> {
        if self.outages.iter().any(|d| d == district) {
            return Err(anyhow!("market-price fetch failed for {district}").into());
        }
        Ok(self.prices.get(district).cloned().unwrap_or_default())
    }
}

/// In-memory weather provider.
#[derive(Debug, Default)]
pub struct InMemoryWeather {
    pub payload: Option<WeatherPayload>,
    pub alerts: Option<String>,
}

impl WeatherProvider for InMemoryWeather {
    fn fetch_weather(&self, _lat: f64, _lon: f64) -> Result<Option<WeatherPayload>, AdvisorError> {
        Ok(self.payload.clone())
    }

    fn fetch_alerts(&self, _lat: f64, _lon: f64) -> Result<String, AdvisorError> {
        Ok(self.alerts.clone().unwrap_or_else(|| "No alerts".to_string()))
    }
}
