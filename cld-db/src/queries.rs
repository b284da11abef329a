//! Typed query methods for retrieving the crypto dataset from the database.
//!
//! All queries return [`cld_core::CryptoRecord`]s (or parts of them) so the
//! frontend and the core spec builders share one model type.
//!
//! # Collection order
//!
//! Records are returned ordered by liveliness score descending with name as
//! tiebreak. That order defines the dropdown option order and the default
//! selection (first record), so it must be deterministic.

use crate::Database;
use cld_core::CryptoRecord;
use rusqlite::params;

impl Database {
    /// Get the full record collection, sparklines attached.
    ///
    /// Returns one `CryptoRecord` per row in `markets`, ordered by
    /// liveliness score descending (name ascending on ties). A record with
    /// no sparkline points gets `sparkline: None` rather than an empty
    /// vector, matching the "absent" edge case the chart updater handles.
    pub fn query_records(&self) -> anyhow::Result<Vec<CryptoRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, symbol, price, market_cap, volume, liveliness_score
             FROM markets
             ORDER BY liveliness_score DESC, name",
        )?;
        let mut records = stmt
            .query_map([], |row| {
                Ok(CryptoRecord {
                    name: row.get(0)?,
                    symbol: row.get(1)?,
                    price: row.get(2)?,
                    market_cap: row.get(3)?,
                    volume: row.get(4)?,
                    liveliness_score: row.get(5)?,
                    sparkline: None,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);
        drop(conn);

        for record in &mut records {
            let points = self.query_sparkline(&record.name)?;
            if !points.is_empty() {
                record.sparkline = Some(points);
            }
        }

        log::info!("query: query_records returned {} records", records.len());
        Ok(records)
    }

    /// Get the ordered sparkline points for one currency.
    ///
    /// Returns prices ordered by point index; empty when the currency has
    /// no stored points.
    pub fn query_sparkline(&self, name: &str) -> anyhow::Result<Vec<f64>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT price FROM sparkline_points
             WHERE name = ?1
             ORDER BY idx",
        )?;
        let rows = stmt
            .query_map(params![name], |row| row.get(0))?
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(rows)
    }

    /// Get all currency names in collection order.
    ///
    /// Same ordering as [`query_records`](Self::query_records); used for
    /// the dropdown options when the full records are not needed.
    pub fn query_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name FROM markets
             ORDER BY liveliness_score DESC, name",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("query: query_names returned {} names", rows.len());
        Ok(rows)
    }
}
