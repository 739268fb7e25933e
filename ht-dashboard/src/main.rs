//! HealthTrace disease outbreak forecasting dashboard
//!
//! Data flow:
//! 1. On mount: load the SciChart bundle, install the chart glue and start
//!    the status poll loop (every 5 minutes, forever).
//! 2. Each poll replaces the status cards and banner and refreshes the
//!    disease buttons.
//! 3. A disease click spawns a `ForecastController::select`; a newer click
//!    supersedes any selection still in flight.

use dioxus::prelude::*;
use ht_core::api::ApiClient;
use ht_core::chart::ChartRenderer;
use ht_core::config::DashboardConfig;
use ht_core::controller::{ForecastController, LoadOutcome};
use ht_core::poller::StatusPoller;
use ht_dashboard_ui::browser::{self, BrowserFetch};
use ht_dashboard_ui::components::{
    AlertBanner, AlertBox, ChartContainer, DiseaseSelector, ExportButton, FeaturePanel,
    ForecastTable, LoadingSpinner, ModelSelector, StatisticsPanel, StatusGrid,
};
use ht_dashboard_ui::js_bridge;
use ht_dashboard_ui::state::AppState;
use ht_dashboard_ui::view::{SignalView, CLIMATE_REGION, FORECAST_REGION};
use std::rc::Rc;

type Controller = ForecastController<BrowserFetch, SignalView>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("healthtrace-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(DashboardConfig::default);
    let state = use_context_provider(|| AppState::new(config.diseases.clone(), config.model_type));
    let view = SignalView::new(state, config.climate_region);

    let controller: Rc<Controller> = use_hook(|| {
        Rc::new(ForecastController::new(
            ApiClient::new(BrowserFetch::new(config.api_base.clone())),
            view,
            ChartRenderer::default(),
        ))
    });

    // ─── Chart glue: one-time install once SciChart has loaded ───
    let wasm_url = config.chart_wasm_url.clone();
    use_hook(move || js_bridge::init_charts(&wasm_url));

    // ─── Status poll loop ───
    let api_base = config.api_base.clone();
    let interval = config.status_interval;
    use_future(move || {
        let poller = StatusPoller::new(ApiClient::new(BrowserFetch::new(api_base.clone())), view, interval);
        async move { poller.run(browser::sleep).await }
    });

    let on_select = move |disease: String| {
        let controller = controller.clone();
        let model = (state.model_type)();
        spawn(async move {
            if let LoadOutcome::Failed(e) = controller.select(&disease, model).await {
                log::warn!("{} forecast unavailable: {}", disease, e);
            }
        });
    };

    let selected = state.selected_disease.read().clone();

    // ─── Render ───
    rsx! {
        document::Script { src: config.chart_script_url.clone() }
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; background: #f8fafc;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 24px; color: #0f172a;",
                "HealthTrace Outbreak Forecasts"
            }

            AlertBanner {}

            if *state.loading.read() {
                LoadingSpinner { message: "Loading current status...".to_string() }
            } else {
                StatusGrid {}
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 8px;",
                DiseaseSelector { on_select }
                ModelSelector {}
            }

            if let Some(disease) = selected {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-top: 16px;",
                    h2 {
                        id: "selectedDisease",
                        style: "margin: 0; font-size: 20px; color: #1e293b;",
                        "{disease}"
                    }
                    ExportButton {}
                }
                AlertBox {}
                StatisticsPanel {}
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin-top: 16px;",
                ChartContainer {
                    id: FORECAST_REGION.as_str().to_string(),
                    title: "Case Forecast".to_string(),
                    min_height: 400,
                }
                div {
                    style: "background: white; border-radius: 12px; padding: 16px; border: 1px solid #e2e8f0;",
                    h3 {
                        style: "margin: 0 0 8px 0; font-size: 16px; color: #1e293b;",
                        "Feature Impact"
                    }
                    FeaturePanel {}
                }
            }

            if config.climate_region {
                div {
                    style: "margin-top: 16px;",
                    ChartContainer {
                        id: CLIMATE_REGION.as_str().to_string(),
                        title: "Climate Conditions".to_string(),
                        min_height: 300,
                    }
                }
            }

            div {
                style: "margin-top: 16px;",
                ForecastTable {}
            }
        }
    }
}
