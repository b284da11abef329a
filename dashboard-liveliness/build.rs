use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy markets.csv to OUT_DIR for include_str
    let markets_src = Path::new("../fixtures/markets.csv");
    if markets_src.exists() {
        fs::copy(markets_src, Path::new(&out_dir).join("markets.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("markets.csv"),
            "name,symbol,price,market_cap,volume,liveliness_score\nBitcoin,BTC,97000,1900000000000,42000000000,98.5\n",
        )
        .unwrap();
    }

    // Copy sparklines.csv to OUT_DIR for include_str. The fixture may be
    // absent in a fresh checkout; an empty file makes every record render
    // the no-data chart instead of failing the build.
    let sparklines_src = Path::new("../fixtures/sparklines.csv");
    if sparklines_src.exists() {
        fs::copy(sparklines_src, Path::new(&out_dir).join("sparklines.csv")).unwrap();
    } else {
        fs::write(Path::new(&out_dir).join("sparklines.csv"), "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/markets.csv");
    println!("cargo:rerun-if-changed=../fixtures/sparklines.csv");
}
