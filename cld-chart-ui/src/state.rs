//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! `selected_crypto` is the one input signal of the reactive update
//! contract: the price chart effect reads it, so any `set` re-runs that
//! effect synchronously and replaces the displayed line chart.

use cld_core::CryptoRecord;
use cld_db::Database;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected crypto name (the dropdown value)
    pub selected_crypto: Signal<String>,
    /// The full record collection, read-only after load
    pub records: Signal<Vec<CryptoRecord>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_crypto: Signal::new(String::new()),
            records: Signal::new(Vec::new()),
        }
    }
}
