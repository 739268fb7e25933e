//! Forecast selection orchestration.
//!
//! A selection moves `Idle → Loading → {Rendered | Failed}`. The forecast
//! payload is fetched first; only once it is valid do the three independent
//! sub-tasks start (forecast chart, feature panel, optional climate chart).
//! Each sub-task owns one region and reports its own failure there.
//!
//! Overlapping selections are resolved with request tokens: every write that
//! follows an await is applied only if the selection's token is still the
//! latest one issued. A superseded selection stops writing as soon as it
//! notices.

use crate::api::{ApiClient, Fetch};
use crate::chart::ChartRenderer;
use crate::error::{DashboardError, Result};
use crate::export::{CsvArtifact, ExportService, ForecastExport};
use crate::features::FeaturePanelState;
use crate::forecast::{ForecastPayload, ModelType};
use crate::view::{ForecastView, RegionContent, RegionId};
use std::cell::{Cell, RefCell};

pub const FEATURE_FAILURE_MESSAGE: &str = "Could not load impact analysis.";
pub const CLIMATE_EMPTY_MESSAGE: &str = "No climate data available";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// Identifies one selection.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RequestToken(u64);

/// Monotonic token source for the stale-response guard.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: Cell<u64>,
}

impl RequestTokens {
    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }
}

/// How one region-scoped sub-task ended.
#[derive(Debug, PartialEq, Clone)]
pub enum SubtaskOutcome {
    Rendered,
    Empty,
    Failed(DashboardError),
    /// A newer selection took over before this one could write
    Superseded,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RenderReport {
    pub forecast_chart: SubtaskOutcome,
    pub features: SubtaskOutcome,
    /// `None` when the page has no climate region
    pub climate: Option<SubtaskOutcome>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum LoadOutcome {
    Rendered(RenderReport),
    Failed(DashboardError),
    Superseded,
}

/// The payload of the latest successful selection.
#[derive(Debug, PartialEq, Clone)]
pub struct CurrentForecast {
    pub disease: String,
    pub payload: ForecastPayload,
}

pub struct ForecastController<F, V> {
    client: ApiClient<F>,
    view: V,
    charts: ChartRenderer,
    tokens: RequestTokens,
    state: Cell<LoadState>,
    current: RefCell<Option<CurrentForecast>>,
    export: ExportService,
}

impl<F: Fetch, V: ForecastView> ForecastController<F, V> {
    pub fn new(client: ApiClient<F>, view: V, charts: ChartRenderer) -> Self {
        Self {
            client,
            view,
            charts,
            tokens: RequestTokens::default(),
            state: Cell::new(LoadState::Idle),
            current: RefCell::new(None),
            export: ExportService::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn current(&self) -> Option<CurrentForecast> {
        self.current.borrow().clone()
    }

    pub fn current_disease(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|c| c.disease.clone())
    }

    /// CSV for the current forecast, `None` while no forecast is loaded.
    pub fn export(&self) -> Option<Result<CsvArtifact>> {
        self.export.export()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Load and render everything for `disease`.
    pub async fn select(&self, disease: &str, model: ModelType) -> LoadOutcome {
        let token = self.tokens.issue();
        log::info!("Loading {} forecast for {}", model.label(), disease);

        self.state.set(LoadState::Loading);
        *self.current.borrow_mut() = None;
        self.export.disable();
        self.view.set_export(None);
        self.view.clear_summary();

        let regions = self.view.regions();
        self.view.show_selected(disease);
        self.view.set_region(
            regions.forecast,
            RegionContent::Loading(format!("Generating {disease} Forecast...")),
        );
        if let Some(climate) = regions.climate {
            self.view.set_region(
                climate,
                RegionContent::Loading("Loading Climate Data...".to_string()),
            );
        }
        self.view.set_region(
            regions.features,
            RegionContent::Loading("Analyzing Feature Impact...".to_string()),
        );

        let result = self.client.forecast(disease, model).await;
        if !self.tokens.is_current(token) {
            log::debug!("Discarding superseded forecast response for {}", disease);
            return LoadOutcome::Superseded;
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Error loading forecast for {}: {}", disease, e);
                self.view
                    .set_region(regions.forecast, RegionContent::Failed(format!("Error: {e}")));
                self.state.set(LoadState::Failed);
                return LoadOutcome::Failed(e);
            }
        };

        self.apply_summary(disease, &payload);

        let climate_task = async {
            match regions.climate {
                Some(region) => Some(self.load_climate(token, disease, region).await),
                None => None,
            }
        };
        let (forecast_chart, features, climate) = futures::join!(
            self.render_forecast_chart(token, regions.forecast, &payload),
            self.load_features(token, disease, regions.features),
            climate_task,
        );

        if !self.tokens.is_current(token) {
            return LoadOutcome::Superseded;
        }
        self.state.set(LoadState::Rendered);
        LoadOutcome::Rendered(RenderReport {
            forecast_chart,
            features,
            climate,
        })
    }

    /// Alert box, statistics, table and export for a fresh payload.
    fn apply_summary(&self, disease: &str, payload: &ForecastPayload) {
        self.view.show_alert_box(&payload.alert());
        self.view.show_statistics(&payload.statistics());
        self.view.show_table(&payload.table());

        self.export.bind(ForecastExport::from_payload(disease, payload));
        match self.export.export() {
            Some(Ok(artifact)) => self.view.set_export(Some(artifact)),
            Some(Err(e)) => {
                log::warn!("Export disabled for {}: {}", disease, e);
                self.export.disable();
            }
            None => {}
        }

        *self.current.borrow_mut() = Some(CurrentForecast {
            disease: disease.to_string(),
            payload: payload.clone(),
        });
    }

    async fn render_forecast_chart(
        &self,
        token: RequestToken,
        region: RegionId,
        payload: &ForecastPayload,
    ) -> SubtaskOutcome {
        if !self.tokens.is_current(token) {
            return SubtaskOutcome::Superseded;
        }
        let rendered = match self.charts.forecast_chart(payload) {
            Ok(spec) => self.view.render_chart(region, &spec).await,
            Err(e) => Err(e),
        };
        if !self.tokens.is_current(token) {
            log::debug!("Discarding superseded forecast chart render");
            return SubtaskOutcome::Superseded;
        }
        match rendered {
            Ok(()) => {
                self.view.set_region(region, RegionContent::Ready);
                SubtaskOutcome::Rendered
            }
            Err(e) => {
                log::error!("Error plotting forecast chart: {}", e);
                self.view
                    .set_region(region, RegionContent::Failed(format!("Error: {e}")));
                SubtaskOutcome::Failed(e)
            }
        }
    }

    async fn load_features(
        &self,
        token: RequestToken,
        disease: &str,
        region: RegionId,
    ) -> SubtaskOutcome {
        let result = self.client.feature_factors(disease).await;
        if !self.tokens.is_current(token) {
            return SubtaskOutcome::Superseded;
        }
        match result {
            Ok(data) => {
                let panel = FeaturePanelState::from_data(data);
                self.view.show_feature_panel(region, &panel);
                match panel {
                    FeaturePanelState::Empty => {
                        self.view.set_region(
                            region,
                            RegionContent::Empty(FeaturePanelState::EMPTY_MESSAGE.to_string()),
                        );
                        SubtaskOutcome::Empty
                    }
                    FeaturePanelState::Tabs(_) => {
                        self.view.set_region(region, RegionContent::Ready);
                        SubtaskOutcome::Rendered
                    }
                }
            }
            Err(e) => {
                log::error!("Error loading feature factors for {}: {}", disease, e);
                self.view.set_region(
                    region,
                    RegionContent::Failed(FEATURE_FAILURE_MESSAGE.to_string()),
                );
                SubtaskOutcome::Failed(e)
            }
        }
    }

    async fn load_climate(
        &self,
        token: RequestToken,
        disease: &str,
        region: RegionId,
    ) -> SubtaskOutcome {
        let result = self.client.climate_data(disease).await;
        if !self.tokens.is_current(token) {
            return SubtaskOutcome::Superseded;
        }
        let data = match result {
            Ok(data) => data,
            Err(e) => {
                log::error!("Error loading climate data for {}: {}", disease, e);
                self.view.set_region(
                    region,
                    RegionContent::Failed(format!("Climate data unavailable: {e}")),
                );
                return SubtaskOutcome::Failed(e);
            }
        };
        if data.is_empty() {
            self.view
                .set_region(region, RegionContent::Empty(CLIMATE_EMPTY_MESSAGE.to_string()));
            return SubtaskOutcome::Empty;
        }
        let rendered = match self.charts.climate_chart(&data) {
            Ok(spec) => self.view.render_chart(region, &spec).await,
            Err(e) => Err(e),
        };
        if !self.tokens.is_current(token) {
            log::debug!("Discarding superseded climate chart render for {}", disease);
            return SubtaskOutcome::Superseded;
        }
        match rendered {
            Ok(()) => {
                self.view.set_region(region, RegionContent::Ready);
                SubtaskOutcome::Rendered
            }
            Err(e) => {
                log::error!("Error plotting climate chart: {}", e);
                self.view.set_region(
                    region,
                    RegionContent::Failed(format!("Climate data unavailable: {e}")),
                );
                SubtaskOutcome::Failed(e)
            }
        }
    }
}
