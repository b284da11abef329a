//! Dataset entity for the dashboard.
//!
//! One `CryptoRecord` per tracked currency. The struct derives `Serialize`
//! so table rows can be passed to D3.js as JSON from the WASM frontend.

use serde::{Deserialize, Serialize};

/// A single tracked cryptocurrency.
///
/// `name` is the selection key: it is expected to be unique within a
/// dataset and stable across a render cycle. The dashboard never mutates
/// records, it only filters and derives from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoRecord {
    /// Display name, e.g. "Bitcoin". Unique selection key.
    pub name: String,
    /// Ticker symbol, e.g. "BTC".
    pub symbol: String,
    /// Current price in USD.
    pub price: f64,
    /// Market capitalization in USD.
    pub market_cap: f64,
    /// 24h trading volume in USD.
    pub volume: f64,
    /// Precomputed liveliness ranking metric. Opaque to the dashboard.
    pub liveliness_score: f64,
    /// Ordered recent price points for the trend line.
    ///
    /// `None` when the upstream data had no sparkline for this record or
    /// the stored points were malformed. The updater treats `None` and an
    /// empty vector identically (no-data chart).
    pub sparkline: Option<Vec<f64>>,
}

impl CryptoRecord {
    /// True if this record has a drawable sparkline (at least one point).
    pub fn has_sparkline(&self) -> bool {
        self.sparkline.as_ref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sparkline: Option<Vec<f64>>) -> CryptoRecord {
        CryptoRecord {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price: 97000.0,
            market_cap: 1.9e12,
            volume: 4.2e10,
            liveliness_score: 98.5,
            sparkline,
        }
    }

    #[test]
    fn has_sparkline_with_points() {
        assert!(record(Some(vec![100.0, 102.0])).has_sparkline());
    }

    #[test]
    fn has_sparkline_absent() {
        assert!(!record(None).has_sparkline());
    }

    #[test]
    fn has_sparkline_empty_is_not_drawable() {
        assert!(!record(Some(Vec::new())).has_sparkline());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(record(Some(vec![1.0]))).unwrap();
        assert_eq!(json["name"], "Bitcoin");
        assert_eq!(json["symbol"], "BTC");
        assert_eq!(json["sparkline"][0], 1.0);
    }
}
