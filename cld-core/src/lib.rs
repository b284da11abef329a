//! Core dataset model and chart specification logic for the crypto
//! liveliness dashboard.
//!
//! This crate is pure and UI-free. It provides:
//! - `models`: the `CryptoRecord` dataset entity
//! - `chart`: declarative chart/table/selector specification types
//! - `view`: the static view builder (selector + bar chart + table)
//! - `update`: the reactive price-trend chart updater
//!
//! The dataset is always an explicit, injected `&[CryptoRecord]` parameter;
//! nothing in this crate holds process-wide state. Rendering is done
//! elsewhere: the functions here only emit serializable specifications.

pub mod models;
pub mod chart;
pub mod view;
pub mod update;

pub use models::CryptoRecord;
pub use view::{build_view, DashboardView};
pub use update::price_trend_chart;
