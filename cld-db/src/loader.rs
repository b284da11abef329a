//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. The CSV formats match the fixture files
//! shipped with the dashboard app.
//!
//! # CSV Formats
//!
//! - **Markets** (has headers):
//!   `name,symbol,price,market_cap,volume,liveliness_score`
//! - **Sparklines** (no headers): `name,idx,price`

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load market records from CSV string.
    ///
    /// Expected format (with headers):
    /// `name,symbol,price,market_cap,volume,liveliness_score`
    ///
    /// Rows with non-numeric price, market cap, volume or score are skipped
    /// and counted rather than aborting the whole load.
    ///
    /// # Example CSV
    /// ```text
    /// name,symbol,price,market_cap,volume,liveliness_score
    /// Bitcoin,BTC,97000,1900000000000,42000000000,98.5
    /// ```
    pub fn load_markets(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            let symbol = r.get(1).unwrap_or("").trim();

            if name.is_empty() || symbol.is_empty() {
                skipped += 1;
                continue;
            }

            let numeric = |i: usize| r.get(i).and_then(|s| s.trim().parse::<f64>().ok());
            let (price, market_cap, volume, liveliness_score) =
                match (numeric(2), numeric(3), numeric(4), numeric(5)) {
                    (Some(p), Some(m), Some(v), Some(l)) => (p, m, v, l),
                    _ => {
                        skipped += 1;
                        continue;
                    }
                };

            conn.execute(
                "INSERT OR REPLACE INTO markets
                 (name, symbol, price, market_cap, volume, liveliness_score)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![name, symbol, price, market_cap, volume, liveliness_score],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} markets, skipped {} invalid", count, skipped);
        Ok(())
    }

    /// Load sparkline points from CSV string.
    ///
    /// Expected format (no headers): `name,idx,price`
    ///
    /// `idx` is the zero-based position of the point within the recent
    /// window. Rows with non-numeric idx or price are skipped; a currency
    /// whose points are all malformed ends up with no sparkline at all,
    /// which the dashboard surfaces as a no-data chart.
    ///
    /// # Example CSV
    /// ```text
    /// Bitcoin,0,96000
    /// Bitcoin,1,97000
    /// ```
    pub fn load_sparklines(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let name = r.get(0).unwrap_or("").trim();
            let idx: Option<i64> = r.get(1).and_then(|s| s.trim().parse().ok());
            let price: Option<f64> = r.get(2).and_then(|s| s.trim().parse().ok());

            let (idx, price) = match (idx, price) {
                (Some(i), Some(p)) if !name.is_empty() => (i, p),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            conn.execute(
                "INSERT OR REPLACE INTO sparkline_points (name, idx, price)
                 VALUES (?1, ?2, ?3)",
                params![name, idx, price],
            )?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} sparkline points, skipped {} invalid",
            count,
            skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_markets_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,97000,1900000000000,42000000000,98.5
Ether,ETH,3600,430000000000,21000000000,91.2
";
        db.load_markets(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM markets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let symbol: String = conn
            .query_row(
                "SELECT symbol FROM markets WHERE name = 'Bitcoin'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(symbol, "BTC");

        let score: f64 = conn
            .query_row(
                "SELECT liveliness_score FROM markets WHERE name = 'Ether'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((score - 91.2).abs() < 0.001);
    }

    #[test]
    fn load_markets_replaces_on_conflict() {
        let db = Database::new().unwrap();
        let csv1 = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,97000,1900000000000,42000000000,98.5
";
        let csv2 = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,98000,1900000000000,42000000000,98.5
";
        db.load_markets(csv1).unwrap();
        db.load_markets(csv2).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM markets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Should have 1 row after upsert");

        let price: f64 = conn
            .query_row(
                "SELECT price FROM markets WHERE name = 'Bitcoin'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((price - 98000.0).abs() < 0.01);
    }

    #[test]
    fn load_markets_skips_non_numeric() {
        let db = Database::new().unwrap();
        let csv = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,97000,1900000000000,42000000000,98.5
Broken,BRK,n/a,1,1,1
AlsoBroken,ALB,1,1,1,---
Ether,ETH,3600,430000000000,21000000000,91.2
";
        db.load_markets(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM markets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2, "Should only load rows with numeric values");
    }

    #[test]
    fn load_sparklines_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
Bitcoin,0,96000
Bitcoin,1,97000
Ether,0,3500
";
        db.load_sparklines(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sparkline_points", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 3);

        let price: f64 = conn
            .query_row(
                "SELECT price FROM sparkline_points WHERE name = 'Bitcoin' AND idx = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((price - 97000.0).abs() < 0.01);
    }

    #[test]
    fn load_sparklines_skips_malformed_rows() {
        let db = Database::new().unwrap();
        // "null" sparklines and scalar garbage must not abort the load.
        let csv = "\
Bitcoin,0,96000
Ether,null,null
Ether,0,not-a-number
Bitcoin,1,97000
";
        db.load_sparklines(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sparkline_points", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 2, "Should only load well-formed numeric points");
    }
}
