//! Crypto Liveliness Dashboard
//!
//! Single-page dashboard showing a crypto dropdown, a price-trend line
//! chart, a liveliness-score bar chart and a sortable rankings table.
//!
//! The bar chart and table are built once from the dataset at load time;
//! only the line chart is reactive. Selecting a crypto in the dropdown
//! updates the `selected_crypto` signal, which re-runs the price chart
//! effect: a pure call to `cld_core::price_trend_chart` whose result
//! replaces the displayed chart.
//!
//! Data flow:
//! 1. `build.rs` copies `markets.csv` and `sparklines.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds these CSVs into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database and
//!    the record collection is queried once.
//! 4. `cld_core::build_view` derives the static specs; the reactive effect
//!    derives the line chart spec per selection.

use cld_chart_ui::components::{
    ChartContainer, ChartHeader, CryptoSelector, ErrorDisplay, LoadingSpinner,
};
use cld_chart_ui::js_bridge;
use cld_chart_ui::state::AppState;
use cld_db::Database;
use dioxus::prelude::*;

/// Market snapshot for the tracked currencies.
const MARKETS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/markets.csv"));
/// Recent price points per currency.
const SPARKLINES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sparklines.csv"));

/// Chart container DOM element IDs used by D3.js to render into.
const PRICE_CHART_ID: &str = "crypto-price-chart";
const LIVELINESS_CHART_ID: &str = "crypto-liveliness-chart";
const TABLE_ID: &str = "crypto-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("crypto-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database on mount
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_markets(MARKETS_CSV) {
                    log::error!("Failed to load markets: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load market data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if !SPARKLINES_CSV.is_empty() {
                    if let Err(e) = db.load_sparklines(SPARKLINES_CSV) {
                        log::error!("Failed to load sparklines: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Failed to load sparkline data: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }

                let records = match db.query_records() {
                    Ok(r) => r,
                    Err(e) => {
                        state
                            .error_msg
                            .set(Some(format!("Failed to query records: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                };

                // Empty dataset is fatal: no default selection can be
                // derived, so fail at startup instead of rendering a
                // broken dropdown.
                match cld_core::build_view(&records) {
                    Ok(view) => {
                        state.selected_crypto.set(view.selector.default.clone());
                    }
                    Err(e) => {
                        log::error!("View build failed: {}", e);
                        state.error_msg.set(Some(e.to_string()));
                        state.loading.set(false);
                        return;
                    }
                }

                state.records.set(records);
                state.db.set(Some(db));
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Render the static view (bar chart + table) once data is loaded
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let records = state.records.read().clone();
        if records.is_empty() {
            return;
        }

        // Initialize D3.js chart scripts
        js_bridge::init_charts();

        let view = match cld_core::build_view(&records) {
            Ok(v) => v,
            Err(e) => {
                log::error!("View build failed: {}", e);
                return;
            }
        };

        let bar_json = serde_json::to_string(&view.liveliness_chart).unwrap_or_default();
        js_bridge::render_bar_chart(LIVELINESS_CHART_ID, &bar_json);

        let table_json = serde_json::to_string(&view.rankings_table).unwrap_or_default();
        js_bridge::render_data_table(TABLE_ID, &table_json);
    });

    // Re-render the price chart whenever the selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let selected = (state.selected_crypto)();
        if selected.is_empty() {
            return;
        }

        let records = state.records.read().clone();

        js_bridge::init_charts();

        let chart = cld_core::price_trend_chart(&selected, &records);
        if chart.is_empty() {
            log::info!("no sparkline data for '{}', rendering no-data chart", selected);
        }

        let chart_json = serde_json::to_string(&chart).unwrap_or_default();
        js_bridge::render_line_chart(PRICE_CHART_ID, &chart_json);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Crypto Liveliness Dashboard".to_string(),
                subtitle: "Liveliness score: precomputed activity ranking per currency".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                CryptoSelector {}

                ChartContainer {
                    id: PRICE_CHART_ID.to_string(),
                    loading: false,
                    min_height: 360,
                }

                ChartContainer {
                    id: LIVELINESS_CHART_ID.to_string(),
                    loading: false,
                    min_height: 400,
                }

                ChartContainer {
                    id: TABLE_ID.to_string(),
                    loading: false,
                    min_height: 300,
                }
            }
        }
    }
}
