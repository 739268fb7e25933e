//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ht_core::alert::Banner;
use ht_core::export::CsvArtifact;
use ht_core::features::FeaturePanelState;
use ht_core::forecast::{ForecastAlert, ForecastStats, ForecastTable, ModelType};
use ht_core::status::DiseaseStatus;
use ht_core::view::RegionContent;
use std::collections::HashMap;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the first status poll is still outstanding
    pub loading: Signal<bool>,
    pub statuses: Signal<Vec<DiseaseStatus>>,
    pub banner: Signal<Option<Banner>>,
    /// Disease buttons, in status order
    pub diseases: Signal<Vec<String>>,
    pub selected_disease: Signal<Option<String>>,
    pub model_type: Signal<ModelType>,
    /// Placeholder or outcome per region id
    pub regions: Signal<HashMap<&'static str, RegionContent>>,
    pub alert_box: Signal<Option<ForecastAlert>>,
    pub statistics: Signal<Option<ForecastStats>>,
    pub table: Signal<Option<ForecastTable>>,
    pub feature_panel: Signal<Option<FeaturePanelState>>,
    /// `None` keeps the export button disabled
    pub export: Signal<Option<CsvArtifact>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(diseases: Vec<String>, model_type: ModelType) -> Self {
        Self {
            loading: Signal::new(true),
            statuses: Signal::new(Vec::new()),
            banner: Signal::new(None),
            diseases: Signal::new(diseases),
            selected_disease: Signal::new(None),
            model_type: Signal::new(model_type),
            regions: Signal::new(HashMap::new()),
            alert_box: Signal::new(None),
            statistics: Signal::new(None),
            table: Signal::new(None),
            feature_panel: Signal::new(None),
            export: Signal::new(None),
        }
    }

    pub fn region(&self, id: &str) -> Option<RegionContent> {
        self.regions.read().get(id).cloned()
    }
}
