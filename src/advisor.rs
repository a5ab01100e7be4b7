//! Advisory Entry Points
//!
//! One function per report shape, each a fresh stateless computation:
//! fetch upstream data, derive, classify, report. Partial upstream failures
//! degrade to explicit no-data results; the one fatal absence is market
//! data, since profitability cannot be computed without a price.

use tracing::warn;

use crate::crops::CropKey;
use crate::error::AdvisorError;
use crate::market::market_recommendation;
use crate::profit::{calculate_profitability, ProfitabilityReport};
use crate::providers::{MarketProvider, SoilProvider, WeatherProvider};
use crate::soil::{classify_npk, estimate_npk, SoilReport, SoilSample};
use crate::weather::{farmer_advice, WeatherReport, WeatherSnapshot};

/// Soil fertility check: which nutrients need fertilizer for this crop here.
pub fn soil_recommendation<S: SoilProvider>(
    provider: &S,
    lat: f64,
    lon: f64,
    crop: &str,
) -> Result<SoilReport, AdvisorError> {
    let crop = CropKey::parse(crop)?;

    match provider.fetch_soil(lat, lon) {
        Ok(Some(payload)) => {
            let sample = SoilSample::from_payload(&payload);
            let classification = classify_npk(&estimate_npk(&sample), crop);
            Ok(SoilReport::from_classification(crop, &classification))
        }
        Ok(None) => Ok(SoilReport::unavailable(crop)),
        Err(err) => {
            warn!(%lat, %lon, error = %err, "soil fetch failed, reporting no data");
            Ok(SoilReport::unavailable(crop))
        }
    }
}

/// Sowing/harvest weather advice for a crop at a location.
pub fn weather_recommendation<W: WeatherProvider>(
    provider: &W,
    lat: f64,
    lon: f64,
    crop: &str,
) -> Result<WeatherReport, AdvisorError> {
    let crop = CropKey::parse(crop)?;

    let payload = match provider.fetch_weather(lat, lon) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Ok(WeatherReport::unavailable(crop)),
        Err(err) => {
            warn!(%lat, %lon, error = %err, "weather fetch failed, reporting no data");
            return Ok(WeatherReport::unavailable(crop));
        }
    };

    let snapshot = WeatherSnapshot::from_payload(&payload);
    let alerts = provider.fetch_alerts(lat, lon).unwrap_or_else(|err| {
        warn!(%lat, %lon, error = %err, "alerts fetch failed");
        "No data".to_string()
    });
    let advice = farmer_advice(&snapshot, &alerts, crop);

    Ok(WeatherReport::Advice {
        crop: crop.display_name().to_string(),
        weather: snapshot,
        alerts,
        advice,
    })
}

/// Full profitability recommendation: soil → NPK classification → best mandi
/// price → two-scenario profitability report.
///
/// A failed soil fetch falls back to a zero sample (every nutrient flags
/// LOW, the conservative remediation case). No market data across all
/// districts is fatal: `NoPriceData`.
pub fn profitability_recommendation<S: SoilProvider, M: MarketProvider>(
    soil_provider: &S,
    market_provider: &M,
    lat: f64,
    lon: f64,
    area_ha: f64,
    crop: &str,
) -> Result<ProfitabilityReport, AdvisorError> {
    let crop = CropKey::parse(crop)?;

    let sample = match soil_provider.fetch_soil(lat, lon) {
        Ok(Some(payload)) => SoilSample::from_payload(&payload),
        Ok(None) => {
            warn!(%lat, %lon, "empty soil response, proceeding with zero sample");
            SoilSample::default()
        }
        Err(err) => {
            warn!(%lat, %lon, error = %err, "soil fetch failed, proceeding with zero sample");
            SoilSample::default()
        }
    };
    let classification = classify_npk(&estimate_npk(&sample), crop);

    let market = market_recommendation(market_provider, crop.key());
    let best = market.best_mandi.ok_or_else(|| AdvisorError::NoPriceData {
        commodity: crop.key().to_string(),
    })?;

    calculate_profitability(crop, area_ha, &classification, best.latest_price_per_kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{InMemoryMarket, InMemorySoil, SoilPayload};

    #[test]
    fn test_unknown_crop_rejected_before_any_fetch() {
        let provider = InMemorySoil {
            payload: None,
            fail: true,
        };
        let err = soil_recommendation(&provider, 10.0, 76.0, "wheat").unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownCrop { .. }));
    }

    #[test]
    fn test_soil_failure_degrades_to_no_data_report() {
        let provider = InMemorySoil {
            payload: None,
            fail: true,
        };
        let report = soil_recommendation(&provider, 10.0, 76.0, "rice").unwrap();
        assert_eq!(report.message.as_deref(), Some("No soil data available"));
        assert!(report.soil_alerts.is_empty());
    }

    #[test]
    fn test_soil_alerts_from_fertile_payload() {
        // Rich soil: N index 0.03*2.0*1000 = 60 (< 257.6 tolerance → LOW),
        // P and K comfortably in band for rice
        let provider = InMemorySoil {
            payload: Some(SoilPayload {
                ph: Some(6.5),
                organic_carbon: Some(150.0),
                cec: Some(180.0),
                clay_content: Some(300.0),
                bulk_density: Some(130.0),
                nitrogen: Some(200.0),
            }),
            fail: false,
        };
        let report = soil_recommendation(&provider, 10.0, 76.0, "rice").unwrap();
        assert_eq!(report.soil_alerts, vec!["Nitrogen LOW → Apply fertilizer"]);
    }

    #[test]
    fn test_profitability_requires_market_data() {
        let soil = InMemorySoil::default();
        let market = InMemoryMarket::default();
        let err =
            profitability_recommendation(&soil, &market, 10.0, 76.0, 1.0, "rice").unwrap_err();
        assert!(matches!(err, AdvisorError::NoPriceData { .. }));
        assert_eq!(
            err.to_string(),
            "No price data available for rice right now."
        );
    }
}
