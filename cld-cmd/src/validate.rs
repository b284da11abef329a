//! Fixture validation for the dashboard dataset.
//!
//! Checks the invariants the UI layer relies on before fixtures ship:
//! the dataset is non-empty, names are unique, and sparkline points are
//! well-formed numeric sequences. Runs the CSVs through the same loader
//! and view builder the dashboard uses, so a passing validation means the
//! app will start.

use cld_db::Database;
use log::{info, warn};
use std::collections::HashSet;

/// Validate fixture CSVs, failing on any invariant violation.
pub fn run_validate(markets_csv: &str, sparklines_csv: Option<&str>) -> anyhow::Result<()> {
    let markets_data = std::fs::read_to_string(markets_csv)?;

    // Name uniqueness must be checked on the raw CSV: the loader upserts
    // by primary key and would silently collapse duplicates.
    check_unique_names(&markets_data)?;

    let db = Database::new()?;
    db.load_markets(&markets_data)?;

    let sparklines_data = match sparklines_csv {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    if let Some(data) = &sparklines_data {
        db.load_sparklines(data)?;
    }

    let records = db.query_records()?;

    // build_view enforces the non-empty precondition.
    let view = cld_core::build_view(&records)?;

    let without_sparkline: Vec<&str> = records
        .iter()
        .filter(|r| !r.has_sparkline())
        .map(|r| r.name.as_str())
        .collect();
    if !without_sparkline.is_empty() {
        warn!(
            "{} record(s) without a sparkline (no-data chart at runtime): {}",
            without_sparkline.len(),
            without_sparkline.join(", ")
        );
    }

    info!(
        "validation passed: {} records, default selection '{}'",
        records.len(),
        view.selector.default
    );
    Ok(())
}

/// Fail when the markets CSV contains the same name twice.
fn check_unique_names(markets_data: &str) -> anyhow::Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(markets_data.as_bytes());

    let mut seen = HashSet::new();
    for result in rdr.records() {
        let r = result?;
        let name = r.get(0).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            anyhow::bail!("duplicate name '{}' in markets CSV", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_MARKETS: &str = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,97000,1900000000000,42000000000,98.5
Ether,ETH,3600,430000000000,21000000000,91.2
";

    #[test]
    fn unique_names_pass() {
        check_unique_names(VALID_MARKETS).unwrap();
    }

    #[test]
    fn duplicate_names_fail() {
        let csv = "\
name,symbol,price,market_cap,volume,liveliness_score
Bitcoin,BTC,97000,1,1,1
Bitcoin,XBT,96000,1,1,1
";
        let err = check_unique_names(csv).unwrap_err();
        assert!(err.to_string().contains("Bitcoin"));
    }

    #[test]
    fn validate_accepts_valid_fixtures() {
        let dir = std::env::temp_dir().join(format!("cld-validate-ok-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let markets = dir.join("markets.csv");
        let sparklines = dir.join("sparklines.csv");
        std::fs::write(&markets, VALID_MARKETS).unwrap();
        std::fs::write(&sparklines, "Bitcoin,0,100\nBitcoin,1,102\n").unwrap();

        run_validate(
            markets.to_str().unwrap(),
            Some(sparklines.to_str().unwrap()),
        )
        .unwrap();

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn validate_rejects_empty_dataset() {
        let dir = std::env::temp_dir().join(format!("cld-validate-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let markets = dir.join("markets.csv");
        std::fs::write(
            &markets,
            "name,symbol,price,market_cap,volume,liveliness_score\n",
        )
        .unwrap();

        let err = run_validate(markets.to_str().unwrap(), None).unwrap_err();
        assert!(
            err.to_string().contains("empty dataset"),
            "Should fail the non-empty precondition: {}",
            err
        );

        std::fs::remove_dir_all(&dir).ok();
    }
}
