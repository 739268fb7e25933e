//! Status, forecast, export and comparison commands.

use crate::console::{format_comparison, ConsoleView};
use anyhow::Context;
use ht_core::api::ApiClient;
use ht_core::chart::ChartRenderer;
use ht_core::config::DashboardConfig;
use ht_core::controller::{ForecastController, LoadOutcome, SubtaskOutcome};
use ht_core::poller::StatusPoller;
use ht_core::reqwest_fetch::ReqwestFetch;
use log::info;

/// Load status once and print it.
pub async fn run_status(fetch: ReqwestFetch, config: &DashboardConfig) -> anyhow::Result<()> {
    let view = ConsoleView::new(false);
    let poller = StatusPoller::new(ApiClient::new(fetch), &view, config.status_interval);
    poller.load().await?;
    Ok(())
}

/// Poll status forever.
pub async fn run_watch(fetch: ReqwestFetch, config: &DashboardConfig) -> anyhow::Result<()> {
    let view = ConsoleView::new(false);
    let poller = StatusPoller::new(ApiClient::new(fetch), &view, config.status_interval);
    info!("Polling status every {:?}", poller.interval());
    poller.run(tokio::time::sleep).await;
    Ok(())
}

fn report_subtask(name: &str, outcome: &SubtaskOutcome) {
    match outcome {
        SubtaskOutcome::Failed(e) => log::warn!("{} failed: {}", name, e),
        SubtaskOutcome::Empty => info!("{}: nothing to show", name),
        SubtaskOutcome::Rendered | SubtaskOutcome::Superseded => {}
    }
}

/// Run a full forecast selection against the console.
pub async fn run_forecast(
    fetch: ReqwestFetch,
    config: &DashboardConfig,
    disease: &str,
) -> anyhow::Result<()> {
    let view = ConsoleView::new(config.climate_region);
    let controller = ForecastController::new(ApiClient::new(fetch), &view, ChartRenderer::default());

    match controller.select(disease, config.model_type).await {
        LoadOutcome::Rendered(report) => {
            report_subtask("forecast chart", &report.forecast_chart);
            report_subtask("feature impact", &report.features);
            if let Some(climate) = &report.climate {
                report_subtask("climate chart", climate);
            }
            Ok(())
        }
        LoadOutcome::Failed(e) => Err(e).with_context(|| format!("loading {} forecast", disease)),
        LoadOutcome::Superseded => anyhow::bail!("forecast for {} was superseded", disease),
    }
}

/// Load a forecast and write its CSV export.
pub async fn run_export(
    fetch: ReqwestFetch,
    config: &DashboardConfig,
    disease: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let view = ConsoleView::quiet(false);
    let controller = ForecastController::new(ApiClient::new(fetch), &view, ChartRenderer::default());

    if let LoadOutcome::Failed(e) = controller.select(disease, config.model_type).await {
        return Err(e).with_context(|| format!("loading {} forecast", disease));
    }
    let artifact = controller
        .export()
        .context("no forecast loaded to export")??;

    let path = output.unwrap_or(&artifact.file_name);
    std::fs::write(path, &artifact.contents).with_context(|| format!("writing {}", path))?;
    info!("Export complete. Output: {}", path);
    Ok(())
}

/// Print LSTM vs GRU predictions side by side.
pub async fn run_compare(fetch: ReqwestFetch, disease: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(fetch);
    let comparison = client
        .compare_models(disease)
        .await
        .with_context(|| format!("comparing models for {}", disease))?;
    for line in format_comparison(&comparison) {
        println!("{}", line);
    }
    Ok(())
}
