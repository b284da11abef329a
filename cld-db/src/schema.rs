//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the market and sparkline tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `markets` - One row per tracked currency: name (primary key), symbol,
///   price, market cap, 24h volume and the precomputed liveliness score.
/// - `sparkline_points` - Ordered recent price points per currency, keyed
///   by `(name, idx)` so the trend line can be reassembled in order.
///
/// A currency with no rows in `sparkline_points` surfaces as a record with
/// an absent sparkline; the dashboard renders a no-data chart for it.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS markets (
        name TEXT PRIMARY KEY,
        symbol TEXT NOT NULL,
        price REAL NOT NULL,
        market_cap REAL NOT NULL,
        volume REAL NOT NULL,
        liveliness_score REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS sparkline_points (
        name TEXT NOT NULL,
        idx INTEGER NOT NULL,
        price REAL NOT NULL,
        PRIMARY KEY (name, idx)
    );
    CREATE INDEX IF NOT EXISTS idx_sparkline_name ON sparkline_points(name);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = ["markets", "sparkline_points"];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
