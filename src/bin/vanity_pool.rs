//! vanity-pool CLI — operator interface to the mining pool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vanity_pool::api::{self, ServerInfo};
use vanity_pool::config::Config;
use vanity_pool::engine::MiningPool;
use vanity_pool::model::RequestId;
use vanity_pool::runner::{MinerCommand, Runner};
use vanity_pool::telemetry::{TelemetryConfig, init_telemetry};
use vanity_pool::validate;

#[derive(Parser)]
#[command(name = "vanity-pool", about = "Pooled vanity-address mining service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the pool daemon
    Serve {
        /// Path to the pool TOML config
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Run one miner invocation directly, bypassing the queue
    Mine {
        /// 64-hex base public key the result is offset from
        base_public_key: String,
        /// Address prefix pattern (wildcards `*` or `.`)
        prefix: String,
        /// Path to the pool TOML config
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Show the normalized form and bit cost of a prefix
    Cost {
        /// Address prefix pattern (wildcards `*` or `.`)
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config } => cmd_serve(config).await,
        Command::Mine {
            base_public_key,
            prefix,
            config,
        } => cmd_mine(base_public_key, prefix, config).await,
        Command::Cost { prefix } => cmd_cost(prefix),
    }
}

async fn cmd_serve(path: PathBuf) -> anyhow::Result<()> {
    let config = Config::load(&path)?;

    let _guard = init_telemetry(TelemetryConfig {
        endpoint: std::env::var("OTEL_ENDPOINT").ok(),
        service_name: "vanity-pool".to_string(),
    })?;

    let runner = MinerCommand::from_command(&config.miner_command)?;
    let pool = MiningPool::new(runner, config.max_bits());
    let info = ServerInfo {
        name: config.name.clone(),
        demand: config.demand.clone(),
        max_bits: config.max_bits(),
    };

    api::serve(pool, info, config.port).await?;
    Ok(())
}

async fn cmd_mine(base_public_key: String, prefix: String, path: PathBuf) -> anyhow::Result<()> {
    let config = Config::load(&path)?;
    let id = RequestId::checked(&base_public_key, &prefix)?;

    let runner = MinerCommand::from_command(&config.miner_command)?;
    let key = runner.mine(id.base_key(), id.prefix()).await?;
    println!("{key}");
    Ok(())
}

fn cmd_cost(prefix: String) -> anyhow::Result<()> {
    let normalized = validate::normalize_prefix(&prefix);
    validate::validate_prefix(&normalized)?;
    println!("{normalized}  {} bits", validate::bit_cost(&normalized));
    Ok(())
}
