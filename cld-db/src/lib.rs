//! In-memory SQLite database layer for crypto market data.
//!
//! This crate plays the dataset-provider role for the dashboard: it loads
//! CSV fixtures into an in-memory SQLite database and exposes typed query
//! methods returning [`cld_core::CryptoRecord`]s for consumption by the
//! Dioxus/D3.js frontend compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - CSV fixtures embedded via `include_str!` at compile time in consuming
//!   crates
//! - Typed query methods returning the core dataset model
//!
//! # Usage
//!
//! ```rust
//! use cld_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_markets("name,symbol,price,market_cap,volume,liveliness_score\nBitcoin,BTC,97000,1900000000000,42000000000,98.5\n").unwrap();
//! db.load_sparklines("Bitcoin,0,96000\nBitcoin,1,97000\n").unwrap();
//!
//! // Query typed results
//! let records = db.query_records().unwrap();
//! assert_eq!(records[0].sparkline.as_ref().unwrap().len(), 2);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `markets` - One row per tracked currency (name is the primary key)
//! - `sparkline_points` - Ordered recent price points per currency

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the crypto market dataset.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment. The dashboard treats
/// its contents as read-only after loading.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
