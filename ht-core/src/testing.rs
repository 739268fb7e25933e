//! In-memory transport and view used by the unit tests.

use crate::alert::Banner;
use crate::api::{Fetch, FetchResponse};
use crate::chart::ChartSpec;
use crate::error::{DashboardError, Result};
use crate::export::CsvArtifact;
use crate::features::FeaturePanelState;
use crate::forecast::{ForecastAlert, ForecastStats, ForecastTable};
use crate::status::DiseaseStatus;
use crate::view::{ForecastView, RegionContent, RegionId, Regions, StatusView};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub const FORECAST_ID: &str = "forecastChart";
pub const FEATURES_ID: &str = "featureFactorsContainer";
pub const CLIMATE_ID: &str = "climateChart";

/// Canned responses keyed by request path.
///
/// Unknown paths fail with a network error. A gated path holds its response
/// until the matching sender fires (or is dropped).
#[derive(Default)]
pub struct FakeFetch {
    routes: RefCell<HashMap<String, Result<FetchResponse>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, body: &str) -> Self {
        self.set(path, body);
        self
    }

    pub fn respond_status(self, path: &str, status: u16, body: &str) -> Self {
        self.set_status(path, status, body);
        self
    }

    pub fn set(&self, path: &str, body: &str) {
        self.set_status(path, 200, body);
    }

    pub fn set_status(&self, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            path.to_string(),
            Ok(FetchResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.routes.borrow_mut().insert(
            path.to_string(),
            Err(DashboardError::Network(message.to_string())),
        );
    }

    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeFetch {
    async fn get(&self, path: &str) -> Result<FetchResponse> {
        self.requests.borrow_mut().push(path.to_string());
        let gate = self.gates.borrow_mut().remove(path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.routes
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(DashboardError::Network(format!("no route for {path}"))))
    }
}

/// Records everything written to it.
pub struct RecordingView {
    has_climate: bool,
    fail_charts: Cell<bool>,
    held_charts: RefCell<HashMap<&'static str, oneshot::Receiver<()>>>,
    status_cards: RefCell<Vec<DiseaseStatus>>,
    banner: RefCell<Option<Banner>>,
    selected: RefCell<Option<String>>,
    regions: RefCell<HashMap<&'static str, RegionContent>>,
    alert_box: RefCell<Option<ForecastAlert>>,
    statistics: RefCell<Option<ForecastStats>>,
    table: RefCell<Option<ForecastTable>>,
    export: RefCell<Option<CsvArtifact>>,
    charts: RefCell<Vec<(&'static str, ChartSpec)>>,
    feature_panel: RefCell<Option<FeaturePanelState>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::build(true)
    }

    pub fn without_climate() -> Self {
        Self::build(false)
    }

    fn build(has_climate: bool) -> Self {
        Self {
            has_climate,
            fail_charts: Cell::new(false),
            held_charts: RefCell::new(HashMap::new()),
            status_cards: RefCell::new(Vec::new()),
            banner: RefCell::new(None),
            selected: RefCell::new(None),
            regions: RefCell::new(HashMap::new()),
            alert_box: RefCell::new(None),
            statistics: RefCell::new(None),
            table: RefCell::new(None),
            export: RefCell::new(None),
            charts: RefCell::new(Vec::new()),
            feature_panel: RefCell::new(None),
        }
    }

    /// Make every subsequent `render_chart` call fail.
    pub fn fail_charts(&self) {
        self.fail_charts.set(true);
    }

    /// Hold the next chart render into `id` until the sender fires.
    pub fn hold_chart(&self, id: &'static str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held_charts.borrow_mut().insert(id, rx);
        tx
    }

    pub fn status_cards(&self) -> Vec<DiseaseStatus> {
        self.status_cards.borrow().clone()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner.borrow().clone()
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    pub fn region(&self, id: &str) -> Option<RegionContent> {
        self.regions.borrow().get(id).cloned()
    }

    pub fn alert_box(&self) -> Option<ForecastAlert> {
        self.alert_box.borrow().clone()
    }

    pub fn statistics(&self) -> Option<ForecastStats> {
        self.statistics.borrow().clone()
    }

    pub fn table(&self) -> Option<ForecastTable> {
        self.table.borrow().clone()
    }

    pub fn export(&self) -> Option<CsvArtifact> {
        self.export.borrow().clone()
    }

    pub fn chart_count(&self) -> usize {
        self.charts.borrow().len()
    }

    pub fn last_chart(&self, id: &str) -> Option<ChartSpec> {
        self.charts
            .borrow()
            .iter()
            .rev()
            .find(|(region, _)| *region == id)
            .map(|(_, spec)| spec.clone())
    }

    pub fn feature_panel(&self) -> Option<FeaturePanelState> {
        self.feature_panel.borrow().clone()
    }

    /// Tabs show only for a populated panel in a ready region.
    pub fn tabs_visible(&self) -> bool {
        let ready = self.region(FEATURES_ID) == Some(RegionContent::Ready);
        ready
            && self
                .feature_panel
                .borrow()
                .as_ref()
                .is_some_and(FeaturePanelState::tabs_visible)
    }
}

impl StatusView for RecordingView {
    fn show_status_cards(&self, statuses: &[DiseaseStatus]) {
        *self.status_cards.borrow_mut() = statuses.to_vec();
    }

    fn show_banner(&self, banner: &Banner) {
        *self.banner.borrow_mut() = Some(banner.clone());
    }
}

impl ForecastView for RecordingView {
    fn regions(&self) -> Regions {
        Regions {
            forecast: RegionId(FORECAST_ID),
            features: RegionId(FEATURES_ID),
            climate: self.has_climate.then_some(RegionId(CLIMATE_ID)),
        }
    }

    fn show_selected(&self, disease: &str) {
        *self.selected.borrow_mut() = Some(disease.to_string());
    }

    fn set_region(&self, region: RegionId, content: RegionContent) {
        self.regions.borrow_mut().insert(region.as_str(), content);
    }

    fn show_alert_box(&self, alert: &ForecastAlert) {
        *self.alert_box.borrow_mut() = Some(alert.clone());
    }

    fn show_statistics(&self, stats: &ForecastStats) {
        *self.statistics.borrow_mut() = Some(stats.clone());
    }

    fn show_table(&self, table: &ForecastTable) {
        *self.table.borrow_mut() = Some(table.clone());
    }

    fn clear_summary(&self) {
        *self.alert_box.borrow_mut() = None;
        *self.statistics.borrow_mut() = None;
        *self.table.borrow_mut() = None;
    }

    fn set_export(&self, artifact: Option<CsvArtifact>) {
        *self.export.borrow_mut() = artifact;
    }

    async fn render_chart(&self, region: RegionId, spec: &ChartSpec) -> Result<()> {
        let held = self.held_charts.borrow_mut().remove(region.as_str());
        if let Some(held) = held {
            let _ = held.await;
        }
        if self.fail_charts.get() {
            return Err(DashboardError::Chart("chart library unavailable".to_string()));
        }
        self.charts.borrow_mut().push((region.as_str(), spec.clone()));
        Ok(())
    }

    fn show_feature_panel(&self, _region: RegionId, panel: &FeaturePanelState) {
        *self.feature_panel.borrow_mut() = Some(panel.clone());
    }
}
