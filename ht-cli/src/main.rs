//! HealthTrace CLI - headless client for the outbreak forecast API.

use clap::Parser;
use ht_core::config::DashboardConfig;
use ht_core::forecast::ModelType;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "ht-cli",
    version,
    about = "HealthTrace outbreak forecast toolkit"
)]
struct Cli {
    /// Base URL of the HealthTrace API
    #[arg(long, default_value = "http://localhost:5000")]
    api_base: String,

    /// Status refresh interval in seconds (watch)
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Forecasting model (lstm or gru)
    #[arg(long, default_value = "lstm")]
    model: ModelType,

    #[command(subcommand)]
    command: ht_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = DashboardConfig::default()
        .with_api_base(cli.api_base)
        .with_status_interval(Duration::from_secs(cli.interval))
        .with_model_type(cli.model);
    log::debug!("Using API at {}", config.api_base);
    ht_cmd::run(config, cli.command).await
}
