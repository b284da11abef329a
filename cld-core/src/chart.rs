//! Declarative chart, table and selector specification types.
//!
//! A specification describes data + labels + title and is handed to a
//! rendering layer (D3.js via the chart-ui bridge). All types derive
//! `Serialize` for JSON export.

use serde::Serialize;

/// A single line series: parallel x/y vectors of equal length.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Line chart specification.
///
/// A chart with no series is the "no data" form: the renderer shows the
/// title (which names the missing selection) over an empty plot area.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

impl LineChartSpec {
    /// True if this spec carries no drawable series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// One bar in a bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Bar chart specification with optional per-bar value labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    /// Render the numeric value on top of each bar.
    pub show_values: bool,
}

/// A table column: field key plus display label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub sortable: bool,
}

/// Sortable data table specification.
///
/// Rows are kept as already-serialized JSON values so the table renderer
/// can address cells by column key without knowing the record type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<serde_json::Value>,
}

/// Single-select control specification.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectorSpec {
    /// Options in collection order.
    pub options: Vec<String>,
    /// Default selection, always one of `options`.
    pub default: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_chart_has_no_series() {
        let spec = LineChartSpec {
            title: "t".into(),
            x_label: "x".into(),
            y_label: "y".into(),
            series: Vec::new(),
        };
        assert!(spec.is_empty());
    }

    #[test]
    fn line_chart_serializes_series_in_order() {
        let spec = LineChartSpec {
            title: "Trend".into(),
            x_label: "Time".into(),
            y_label: "Price (USD)".into(),
            series: vec![LineSeries {
                x: vec![0.0, 1.0],
                y: vec![10.0, 11.0],
            }],
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["series"][0]["x"][1], 1.0);
        assert_eq!(json["series"][0]["y"][0], 10.0);
    }
}
