//! Signal-backed implementation of the core view traits.
//!
//! Every write lands in an [`AppState`] signal; components re-render from
//! there. Charts go straight to the JS bridge since SciChart owns its DOM.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::alert::Banner;
use ht_core::chart::ChartSpec;
use ht_core::error::Result;
use ht_core::export::CsvArtifact;
use ht_core::features::FeaturePanelState;
use ht_core::forecast::{ForecastAlert, ForecastStats, ForecastTable};
use ht_core::status::{disease_names, DiseaseStatus};
use ht_core::view::{ForecastView, RegionContent, RegionId, Regions, StatusView};

pub const FORECAST_REGION: RegionId = RegionId("forecastChart");
pub const FEATURES_REGION: RegionId = RegionId("featureFactorsContainer");
pub const CLIMATE_REGION: RegionId = RegionId("climateChart");

#[derive(Clone, Copy)]
pub struct SignalView {
    state: AppState,
    has_climate: bool,
}

impl SignalView {
    pub fn new(state: AppState, has_climate: bool) -> Self {
        Self { state, has_climate }
    }
}

impl StatusView for SignalView {
    fn show_status_cards(&self, statuses: &[DiseaseStatus]) {
        let mut state = self.state;
        let names = disease_names(statuses);
        if !names.is_empty() {
            state.diseases.set(names);
        }
        state.statuses.set(statuses.to_vec());
        state.loading.set(false);
    }

    fn show_banner(&self, banner: &Banner) {
        let mut state = self.state;
        state.banner.set(Some(banner.clone()));
        state.loading.set(false);
    }
}

impl ForecastView for SignalView {
    fn regions(&self) -> Regions {
        Regions {
            forecast: FORECAST_REGION,
            features: FEATURES_REGION,
            climate: self.has_climate.then_some(CLIMATE_REGION),
        }
    }

    fn show_selected(&self, disease: &str) {
        let mut state = self.state;
        state.selected_disease.set(Some(disease.to_string()));
    }

    fn set_region(&self, region: RegionId, content: RegionContent) {
        let mut state = self.state;
        if !matches!(content, RegionContent::Ready) && region != FEATURES_REGION {
            js_bridge::destroy_chart(region.as_str());
        }
        state.regions.write().insert(region.as_str(), content);
    }

    fn show_alert_box(&self, alert: &ForecastAlert) {
        let mut state = self.state;
        state.alert_box.set(Some(alert.clone()));
    }

    fn show_statistics(&self, stats: &ForecastStats) {
        let mut state = self.state;
        state.statistics.set(Some(stats.clone()));
    }

    fn show_table(&self, table: &ForecastTable) {
        let mut state = self.state;
        state.table.set(Some(table.clone()));
    }

    fn clear_summary(&self) {
        let mut state = self.state;
        state.alert_box.set(None);
        state.statistics.set(None);
        state.table.set(None);
    }

    fn set_export(&self, artifact: Option<CsvArtifact>) {
        let mut state = self.state;
        state.export.set(artifact);
    }

    async fn render_chart(&self, region: RegionId, spec: &ChartSpec) -> Result<()> {
        let json = spec.to_json()?;
        log::debug!("Rendering {} points into {}", spec.point_count(), region.as_str());
        js_bridge::render_chart(region.as_str(), &json).await
    }

    fn show_feature_panel(&self, _region: RegionId, panel: &FeaturePanelState) {
        let mut state = self.state;
        state.feature_panel.set(Some(panel.clone()));
    }
}
