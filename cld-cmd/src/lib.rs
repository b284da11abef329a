//! Command implementations for the dashboard CLI.
//!
//! Provides the `serve` subcommand that binds the built dashboard bundle
//! to a local network listener, and `validate` for checking fixture CSVs
//! against the dataset invariants before they ship.

use clap::Subcommand;

pub mod serve;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the built dashboard bundle on a local listener
    Serve {
        /// Directory containing the built dashboard (index.html + assets)
        #[arg(short = 'd', long, default_value = "dist")]
        dist: String,

        /// Port to bind on 127.0.0.1
        #[arg(short = 'p', long, default_value_t = 8080)]
        port: u16,
    },

    /// Validate market and sparkline fixture CSVs
    Validate {
        /// Path to the markets CSV (with headers)
        #[arg(short = 'm', long)]
        markets_csv: String,

        /// Path to the sparklines CSV (no headers)
        #[arg(short = 's', long)]
        sparklines_csv: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { dist, port } => serve::run_serve(&dist, port).await,
        Command::Validate {
            markets_csv,
            sparklines_csv,
        } => validate::run_validate(&markets_csv, sparklines_csv.as_deref()),
    }
}
