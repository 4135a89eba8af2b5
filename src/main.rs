// src/main.rs

//! Faleproxy server entry point.

use clap::Parser;

use faleproxy::config::Config;
use faleproxy::error::Result;
use faleproxy::server;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(
    name = "faleproxy",
    version,
    about = "Fetches web pages with every Yale rewritten to Fale"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    let level = if cli.quiet {
        "warn"
    } else {
        config.logging.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    server::serve(config).await
}
