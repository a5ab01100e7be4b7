//! Market Module
//!
//! Scans a fixed ordered list of candidate districts for mandi prices,
//! summarises each district's price series (latest-first ordering, ₹/quintal
//! → ₹/kg normalisation, trend against the oldest record), and recommends
//! the mandi with the highest latest price.
//!
//! The scan is an explicit retryable collection: one blocking call per
//! district, failures logged and skipped, never short-circuiting the rest.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::providers::{MandiPriceRecord, MarketProvider};
use crate::util::round2;

/// Candidate districts, scanned in this order.
pub const MANDI_DISTRICTS: [&str; 10] = [
    "Thrissur",
    "Palakkad",
    "Kottayam",
    "Ernakulam",
    "Malappuram",
    "Alappuzha",
    "Kollam",
    "Kozhikode",
    "Kannur",
    "Idukki",
];

/// Date format used by the market-price API.
const ARRIVAL_DATE_FORMAT: &str = "%d/%m/%Y";

/// Direction of the price series between its oldest and latest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTrend {
    Rising,
    Falling,
    Neutral,
}

impl PriceTrend {
    pub fn display_text(&self) -> &'static str {
        match self {
            PriceTrend::Rising => "Rising",
            PriceTrend::Falling => "Falling",
            PriceTrend::Neutral => "Neutral",
        }
    }
}

/// Summarised price quote for one district's mandi.
#[derive(Debug, Clone, Serialize)]
pub struct MandiQuote {
    pub district: String,

    pub commodity: String,

    /// Arrival date of the latest record, `%d/%m/%Y`
    pub latest_date: String,

    #[serde(rename = "latest_price_₹_per_kg")]
    pub latest_price_per_kg: f64,

    /// E.g. "Rising (3.5%)"
    pub trend: String,
}

/// Market recommendation across all scanned districts.
#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub commodity: String,

    pub best_mandi: Option<MandiQuote>,

    pub other_mandis: Vec<MandiQuote>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Summarise one district's raw price series into a quote.
///
/// Returns `None` when the series is empty or any arrival date fails to
/// parse; a malformed district contributes nothing, like a failed fetch.
pub fn summarize_district(commodity: &str, records: &[MandiPriceRecord]) -> Option<MandiQuote> {
    if records.is_empty() {
        return None;
    }

    let mut dated: Vec<(NaiveDate, &MandiPriceRecord)> = records
        .iter()
        .map(|rec| {
            NaiveDate::parse_from_str(&rec.arrival_date, ARRIVAL_DATE_FORMAT)
                .ok()
                .map(|date| (date, rec))
        })
        .collect::<Option<Vec<_>>>()?;

    // Latest first; stable, so same-day records keep their upstream order
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    // Normalise ₹/quintal → ₹/kg
    let latest_per_kg = dated.first().map(|(_, rec)| rec.price / 100.0)?;
    let oldest_per_kg = dated.last().map(|(_, rec)| rec.price / 100.0)?;

    let trend = if latest_per_kg > oldest_per_kg {
        PriceTrend::Rising
    } else if latest_per_kg < oldest_per_kg {
        PriceTrend::Falling
    } else {
        PriceTrend::Neutral
    };

    // Whole-number changes render with a trailing .0 ("Falling (-10.0%)");
    // the zero-oldest guard alone renders a bare 0. Both forms are part of
    // the downstream trend-string contract.
    let percent_text = if oldest_per_kg != 0.0 {
        let pct = round2(((latest_per_kg - oldest_per_kg) / oldest_per_kg) * 100.0);
        if pct.fract() == 0.0 {
            format!("{pct:.1}")
        } else {
            pct.to_string()
        }
    } else {
        "0".to_string()
    };

    let (latest_date, latest_rec) = dated[0];
    Some(MandiQuote {
        district: latest_rec.district.clone(),
        commodity: commodity.to_string(),
        latest_date: latest_date.format(ARRIVAL_DATE_FORMAT).to_string(),
        latest_price_per_kg: round2(latest_per_kg),
        trend: format!("{} ({}%)", trend.display_text(), percent_text),
    })
}

/// Scan all candidate districts and recommend the best mandi.
///
/// Best = highest latest price; ties go to the earlier district in scan
/// order. A district whose fetch fails is logged and skipped.
pub fn market_recommendation<P: MarketProvider>(provider: &P, commodity: &str) -> MarketReport {
    let mut quotes: Vec<MandiQuote> = Vec::new();

    for district in MANDI_DISTRICTS {
        let records = match provider.fetch_prices(commodity, district) {
            Ok(records) => records,
            Err(err) => {
                warn!(%commodity, %district, error = %err, "skipping district after failed price fetch");
                continue;
            }
        };

        if let Some(quote) = summarize_district(commodity, &records) {
            quotes.push(quote);
        }
    }

    if quotes.is_empty() {
        return MarketReport {
            commodity: commodity.to_string(),
            best_mandi: None,
            other_mandis: Vec::new(),
            message: Some(format!(
                "No price data available for {commodity} right now."
            )),
        };
    }

    let mut best_idx = 0;
    for (i, quote) in quotes.iter().enumerate().skip(1) {
        if quote.latest_price_per_kg > quotes[best_idx].latest_price_per_kg {
            best_idx = i;
        }
    }

    let best = quotes[best_idx].clone();
    let others = quotes
        .into_iter()
        .filter(|q| q.district != best.district)
        .collect();

    MarketReport {
        commodity: commodity.to_string(),
        best_mandi: Some(best),
        other_mandis: others,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::InMemoryMarket;
    use approx::assert_relative_eq;
    use rustc_hash::FxHashMap;

    fn record(district: &str, date: &str, price: f64) -> MandiPriceRecord {
        MandiPriceRecord::new(district, date, price)
    }

    #[test]
    fn test_summary_orders_by_date_not_position() {
        let records = vec![
            record("Thrissur", "01/03/2025", 2400.0),
            record("Thrissur", "15/03/2025", 2600.0), // latest despite mid position
            record("Thrissur", "08/03/2025", 2500.0),
        ];
        let quote = summarize_district("rice", &records).unwrap();
        assert_eq!(quote.latest_date, "15/03/2025");
        assert_relative_eq!(quote.latest_price_per_kg, 26.0);
        // (26 - 24) / 24 * 100 = 8.33
        assert_eq!(quote.trend, "Rising (8.33%)");
    }

    #[test]
    fn test_summary_falling_trend() {
        let records = vec![
            record("Kollam", "10/02/2025", 3000.0),
            record("Kollam", "20/02/2025", 2700.0),
        ];
        let quote = summarize_district("rubber", &records).unwrap();
        // Whole-number change keeps its trailing decimal
        assert_eq!(quote.trend, "Falling (-10.0%)");
    }

    #[test]
    fn test_summary_neutral_single_record() {
        let records = vec![record("Idukki", "05/01/2025", 2000.0)];
        let quote = summarize_district("coconut", &records).unwrap();
        assert_eq!(quote.trend, "Neutral (0.0%)");
        assert_relative_eq!(quote.latest_price_per_kg, 20.0);
    }

    #[test]
    fn test_summary_zero_oldest_price_guard() {
        let records = vec![
            record("Kannur", "01/01/2025", 0.0),
            record("Kannur", "02/01/2025", 1500.0),
        ];
        let quote = summarize_district("rice", &records).unwrap();
        // Division guard: percent change reported as a bare 0, no decimal
        assert_eq!(quote.trend, "Rising (0%)");
    }

    #[test]
    fn test_summary_rejects_malformed_date() {
        let records = vec![
            record("Thrissur", "2025-03-01", 2400.0), // wrong format
            record("Thrissur", "15/03/2025", 2600.0),
        ];
        assert!(summarize_district("rice", &records).is_none());
    }

    #[test]
    fn test_summary_empty_series() {
        assert!(summarize_district("rice", &[]).is_none());
    }

    #[test]
    fn test_recommendation_picks_highest_latest_price() {
        let mut prices = FxHashMap::default();
        prices.insert(
            "Thrissur".to_string(),
            vec![record("Thrissur", "01/03/2025", 2400.0)],
        );
        prices.insert(
            "Palakkad".to_string(),
            vec![record("Palakkad", "01/03/2025", 2800.0)],
        );
        prices.insert(
            "Kottayam".to_string(),
            vec![record("Kottayam", "01/03/2025", 2600.0)],
        );
        let provider = InMemoryMarket {
            prices,
            outages: Vec::new(),
        };

        let report = market_recommendation(&provider, "rice");
        let best = report.best_mandi.unwrap();
        assert_eq!(best.district, "Palakkad");
        assert_eq!(report.other_mandis.len(), 2);
        assert!(report.message.is_none());
    }

    #[test]
    fn test_recommendation_skips_failed_district() {
        let mut prices = FxHashMap::default();
        prices.insert(
            "Kottayam".to_string(),
            vec![record("Kottayam", "01/03/2025", 2600.0)],
        );
        let provider = InMemoryMarket {
            prices,
            // Earlier districts in scan order fail outright
            outages: vec!["Thrissur".to_string(), "Palakkad".to_string()],
        };

        let report = market_recommendation(&provider, "rice");
        assert_eq!(report.best_mandi.unwrap().district, "Kottayam");
    }

    #[test]
    fn test_recommendation_no_data_anywhere() {
        let provider = InMemoryMarket::default();
        let report = market_recommendation(&provider, "coconut");
        assert!(report.best_mandi.is_none());
        assert!(report.other_mandis.is_empty());
        assert_eq!(
            report.message.as_deref(),
            Some("No price data available for coconut right now.")
        );
    }

    #[test]
    fn test_report_price_field_name() {
        let quote = summarize_district("rice", &[record("Thrissur", "01/03/2025", 2500.0)]).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["latest_price_₹_per_kg"], 25.0);
    }
}
