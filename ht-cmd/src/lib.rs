//! Command implementations for the HealthTrace CLI.
//!
//! Drives the same poller and forecast controller as the dashboard, against
//! a console view and the native reqwest transport.

use clap::Subcommand;
use ht_core::config::DashboardConfig;
use ht_core::reqwest_fetch::ReqwestFetch;
use std::time::Duration;

pub mod commands;
pub mod console;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch current status once and print cards and banner
    Status,

    /// Poll current status forever at the configured interval
    Watch,

    /// Load and summarise a disease forecast
    Forecast {
        /// Disease name as reported by the status endpoint
        disease: String,

        /// Also fetch and summarise climate data
        #[arg(long)]
        climate: bool,
    },

    /// Write the forecast CSV for a disease
    Export {
        disease: String,

        /// Output path (defaults to <disease>_forecast.csv)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Compare LSTM and GRU predictions for a disease
    Compare { disease: String },
}

/// Build the HTTP transport from the configured base URL.
pub fn transport(config: &DashboardConfig) -> anyhow::Result<ReqwestFetch> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    Ok(ReqwestFetch::with_client(client, config.api_base.clone()))
}

pub async fn run(config: DashboardConfig, command: Command) -> anyhow::Result<()> {
    let fetch = transport(&config)?;
    match command {
        Command::Status => commands::run_status(fetch, &config).await,
        Command::Watch => commands::run_watch(fetch, &config).await,
        Command::Forecast { disease, climate } => {
            let config = config.with_climate_region(climate);
            commands::run_forecast(fetch, &config, &disease).await
        }
        Command::Export { disease, output } => {
            commands::run_export(fetch, &config, &disease, output.as_deref()).await
        }
        Command::Compare { disease } => commands::run_compare(fetch, &disease).await,
    }
}
