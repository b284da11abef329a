//! CLD CLI - command line tool for the crypto liveliness dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cld-cli",
    version,
    about = "Crypto Liveliness Dashboard toolkit"
)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: cld_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    cld_cmd::run(cli.command).await
}
