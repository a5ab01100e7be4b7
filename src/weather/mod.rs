//! Weather Module
//!
//! Derives a daily weather snapshot from the raw upstream observation and
//! generates sowing/harvest advice against the crop's tolerance band.
//! A missing upstream observation degrades to an explicit no-data report.

use serde::Serialize;

use crate::crops::{weather_tolerance, CropKey};
use crate::providers::WeatherPayload;

/// Daily weather snapshot in report units.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSnapshot {
    pub description: String,

    /// Mean of the day's max and min temperature (°C)
    pub avg_temp: f64,

    /// Precipitation sum for the day (mm)
    pub rain: f64,

    pub sunrise: Option<String>,

    pub sunset: Option<String>,

    pub annual_rainfall: Option<f64>,
}

impl WeatherSnapshot {
    pub fn from_payload(payload: &WeatherPayload) -> Self {
        Self {
            description: payload
                .weather_description
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            avg_temp: (payload.max_temperature + payload.min_temperature) / 2.0,
            rain: payload.precipitation_sum.unwrap_or(0.0),
            sunrise: payload.sunrise.clone(),
            sunset: payload.sunset.clone(),
            annual_rainfall: payload.annual_rainfall,
        }
    }
}

/// Weather advice report. The no-data shape differs from the advice shape
/// and both are part of the downstream contract, hence the untagged enum.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WeatherReport {
    /// Upstream returned no observation
    Unavailable {
        crop: String,
        weather_advice: Vec<String>,
    },

    /// Full advice with the snapshot and alert text
    Advice {
        crop: String,
        weather: WeatherSnapshot,
        alerts: String,
        advice: Vec<String>,
    },
}

impl WeatherReport {
    pub fn unavailable(crop: CropKey) -> Self {
        WeatherReport::Unavailable {
            crop: crop.display_name().to_string(),
            weather_advice: vec!["No weather data available".to_string()],
        }
    }
}

/// Generate farmer advice for a crop from the snapshot and alert text.
///
/// Falls back to an all-clear line when nothing needs flagging.
pub fn farmer_advice(snapshot: &WeatherSnapshot, alerts: &str, crop: CropKey) -> Vec<String> {
    let tolerance = weather_tolerance(crop);
    let mut recs = Vec::new();

    if snapshot.avg_temp < tolerance.temp_min_c {
        recs.push(format!(
            "Temperature is {:.1}°C, too low for {}. Wait before sowing.",
            snapshot.avg_temp,
            crop.key()
        ));
    } else if snapshot.avg_temp > tolerance.temp_max_c {
        recs.push(format!(
            "Temperature is {:.1}°C, too high for {}. Provide irrigation or shade if possible.",
            snapshot.avg_temp,
            crop.key()
        ));
    }

    if snapshot.rain > tolerance.rain_max_mm {
        recs.push(format!(
            "Rainfall is {:.1} mm, postpone sowing/harvest to avoid losses.",
            snapshot.rain
        ));
    }

    if !alerts.is_empty() && alerts != "No alerts" {
        recs.push(format!(
            "Weather alert issued: {alerts}. Follow official instructions."
        ));
    }

    if recs.is_empty() {
        recs.push(format!(
            "Weather looks good for {}. You can continue with normal farm work.",
            crop.key()
        ));
    }

    recs
}
