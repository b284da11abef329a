//! Reactive price-trend chart updater.
//!
//! This is the one reactive piece of the dashboard: a pure function from
//! (selected name, dataset) to a line chart specification. The hosting UI
//! runtime re-invokes it synchronously whenever the selection signal
//! changes and swaps the returned spec into the displayed chart.

use crate::chart::{LineChartSpec, LineSeries};
use crate::models::CryptoRecord;

/// X-axis label for the trend chart.
const X_LABEL: &str = "Time";
/// Y-axis label for the trend chart.
const Y_LABEL: &str = "Price (USD)";

/// Build the price-trend line chart for the currently selected crypto.
///
/// Filters `records` by `name == selected_name`; on duplicate names the
/// first match in collection order wins (defensive fallback, duplicates
/// violate the dataset invariant).
///
/// Returns the no-data spec (zero series, title naming the selection) when
/// no record matches or when the matching record has no drawable
/// sparkline. A missing record and a malformed sparkline are deliberately
/// indistinguishable to the user.
///
/// Pure and side-effect-free: safe to call repeatedly with any inputs.
pub fn price_trend_chart(selected_name: &str, records: &[CryptoRecord]) -> LineChartSpec {
    let Some(record) = records.iter().find(|r| r.name == selected_name) else {
        log::warn!("no record named '{}' in dataset", selected_name);
        return no_data_chart(selected_name);
    };

    let sparkline = match record.sparkline.as_deref() {
        Some(points) if !points.is_empty() => points,
        _ => {
            log::warn!("record '{}' has no usable sparkline", selected_name);
            return no_data_chart(selected_name);
        }
    };

    // x-values are elapsed time steps 0..n-1 over the sparkline window.
    let x = (0..sparkline.len()).map(|i| i as f64).collect();

    LineChartSpec {
        title: format!("7-Day Price Trend for {}", selected_name),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        series: vec![LineSeries {
            x,
            y: sparkline.to_vec(),
        }],
    }
}

/// The "no data" line chart spec: zero series, title naming the selection.
fn no_data_chart(selected_name: &str) -> LineChartSpec {
    LineChartSpec {
        title: format!("Price Trend for {} (No Data)", selected_name),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        series: Vec::new(),
    }
}
