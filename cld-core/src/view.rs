//! Static view builder: composes the initial page specifications from the
//! injected dataset.
//!
//! Given the full record collection, produces the selector options, the
//! liveliness bar chart and the rankings table. All three are derived once
//! at load time; only the price line chart is reactive (see
//! [`crate::update`]).

use crate::chart::{Bar, BarChartSpec, SelectorSpec, TableColumn, TableSpec};
use crate::models::CryptoRecord;

/// Fixed table columns, in display order.
pub const TABLE_COLUMNS: [&str; 6] = [
    "name",
    "symbol",
    "price",
    "market_cap",
    "volume",
    "liveliness_score",
];

/// The static portion of the dashboard: everything except the reactive
/// price-trend line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selector: SelectorSpec,
    pub liveliness_chart: BarChartSpec,
    pub rankings_table: TableSpec,
}

/// Build the static view from the full record collection.
///
/// The selector options are exactly the `name` values in collection order
/// with the first record's name as the default selection. The bar chart
/// plots `liveliness_score` per name with value labels on each bar. The
/// table carries the six fixed columns for all records.
///
/// An empty collection is a precondition violation: no default selection
/// can be derived, so this fails fast rather than producing a broken
/// control.
pub fn build_view(records: &[CryptoRecord]) -> anyhow::Result<DashboardView> {
    let first = match records.first() {
        Some(r) => r,
        None => anyhow::bail!("cannot build dashboard view from an empty dataset"),
    };

    let selector = SelectorSpec {
        options: records.iter().map(|r| r.name.clone()).collect(),
        default: first.name.clone(),
    };

    let liveliness_chart = BarChartSpec {
        title: "Liveliness Score of Top 15 Cryptos".to_string(),
        x_label: "Crypto".to_string(),
        y_label: "Liveliness Score".to_string(),
        bars: records
            .iter()
            .map(|r| Bar {
                label: r.name.clone(),
                value: r.liveliness_score,
            })
            .collect(),
        show_values: true,
    };

    let columns = TABLE_COLUMNS
        .iter()
        .map(|key| TableColumn {
            key: (*key).to_string(),
            label: column_label(key),
            sortable: true,
        })
        .collect();

    let rows = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "symbol": r.symbol,
                "price": r.price,
                "market_cap": r.market_cap,
                "volume": r.volume,
                "liveliness_score": r.liveliness_score,
            })
        })
        .collect();

    let rankings_table = TableSpec {
        title: "Crypto Rankings".to_string(),
        columns,
        rows,
    };

    log::info!(
        "built dashboard view: {} selector options, {} bars, {} table rows",
        selector.options.len(),
        liveliness_chart.bars.len(),
        rankings_table.rows.len()
    );

    Ok(DashboardView {
        selector,
        liveliness_chart,
        rankings_table,
    })
}

/// Human-readable column heading for a field key.
fn column_label(key: &str) -> String {
    match key {
        "name" => "Name",
        "symbol" => "Symbol",
        "price" => "Price (USD)",
        "market_cap" => "Market Cap",
        "volume" => "Volume (24h)",
        "liveliness_score" => "Liveliness Score",
        other => other,
    }
    .to_string()
}
