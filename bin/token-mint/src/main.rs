//! Token minting tool.
//!
//! Mints 5000 tokens of the deployed token contract to the account derived
//! from the configured private key and waits for confirmation. Any failure
//! is printed to stderr and exits with status 1.

use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use token_mint::{config::MintConfig, mint};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "token-mint")]
#[command(about = "Mint tokens to the signer's own account")]
#[command(version)]
struct Cli {
    /// Path to a TOML project configuration. Defaults to the built-in Sepolia setup.
    #[arg(long, env = "TOKEN_MINT_CONFIG")]
    config: Option<PathBuf>,

    /// Network from the configuration to mint on.
    #[arg(long)]
    network: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // the signing key usually lives in a .env file next to the project
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => MintConfig::load(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => MintConfig::default(),
    };

    let receipt = mint::run(&config, cli.network.as_deref()).await?;
    println!("{receipt}");

    Ok(())
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
