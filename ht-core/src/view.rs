//! Presentation seams driven by the poller and the forecast controller.
//!
//! The orchestration code never touches a UI toolkit directly. It writes
//! into a [`StatusView`] / [`ForecastView`], which the Dioxus app implements
//! over reactive signals and the CLI implements over stdout. Methods take
//! `&self`; implementors use interior mutability, since the three forecast
//! sub-tasks write into the view concurrently.

use crate::alert::Banner;
use crate::chart::ChartSpec;
use crate::error::Result;
use crate::export::CsvArtifact;
use crate::features::FeaturePanelState;
use crate::forecast::{ForecastAlert, ForecastStats, ForecastTable};
use crate::status::DiseaseStatus;

/// DOM id (or equivalent handle) of one independently updated region.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RegionId(pub &'static str);

impl RegionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// The regions a forecast selection writes into.
///
/// `climate` is `None` when the hosting page has no climate chart; the
/// controller then skips the climate fetch entirely.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Regions {
    pub forecast: RegionId,
    pub features: RegionId,
    pub climate: Option<RegionId>,
}

/// Placeholder or outcome shown inside a region.
#[derive(Debug, PartialEq, Clone)]
pub enum RegionContent {
    Loading(String),
    /// Inline, region-scoped failure message
    Failed(String),
    /// Valid response with nothing to show
    Empty(String),
    /// The region's real content has been rendered
    Ready,
}

impl RegionContent {
    pub fn is_loading(&self) -> bool {
        matches!(self, RegionContent::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RegionContent::Failed(_))
    }
}

pub trait StatusView {
    /// Replace every status card.
    fn show_status_cards(&self, statuses: &[DiseaseStatus]);
    fn show_banner(&self, banner: &Banner);
}

#[allow(async_fn_in_trait)]
pub trait ForecastView {
    /// Capability check for the page's regions.
    fn regions(&self) -> Regions;
    fn show_selected(&self, disease: &str);
    fn set_region(&self, region: RegionId, content: RegionContent);
    fn show_alert_box(&self, alert: &ForecastAlert);
    fn show_statistics(&self, stats: &ForecastStats);
    fn show_table(&self, table: &ForecastTable);
    /// Drop the alert box, statistics and table of the previous selection.
    fn clear_summary(&self);
    /// `None` disables the export button.
    fn set_export(&self, artifact: Option<CsvArtifact>);
    /// Discard any chart already in `region` and draw `spec` from scratch.
    ///
    /// Resolves once the chart is on screen, or with
    /// [`DashboardError::Chart`](crate::DashboardError::Chart) when the
    /// charting collaborator rejects the render.
    async fn render_chart(&self, region: RegionId, spec: &ChartSpec) -> Result<()>;
    fn show_feature_panel(&self, region: RegionId, panel: &FeaturePanelState);
}

impl<T: StatusView> StatusView for &T {
    fn show_status_cards(&self, statuses: &[DiseaseStatus]) {
        (**self).show_status_cards(statuses)
    }

    fn show_banner(&self, banner: &Banner) {
        (**self).show_banner(banner)
    }
}

impl<T: ForecastView> ForecastView for &T {
    fn regions(&self) -> Regions {
        (**self).regions()
    }

    fn show_selected(&self, disease: &str) {
        (**self).show_selected(disease)
    }

    fn set_region(&self, region: RegionId, content: RegionContent) {
        (**self).set_region(region, content)
    }

    fn show_alert_box(&self, alert: &ForecastAlert) {
        (**self).show_alert_box(alert)
    }

    fn show_statistics(&self, stats: &ForecastStats) {
        (**self).show_statistics(stats)
    }

    fn show_table(&self, table: &ForecastTable) {
        (**self).show_table(table)
    }

    fn clear_summary(&self) {
        (**self).clear_summary()
    }

    fn set_export(&self, artifact: Option<CsvArtifact>) {
        (**self).set_export(artifact)
    }

    async fn render_chart(&self, region: RegionId, spec: &ChartSpec) -> Result<()> {
        (**self).render_chart(region, spec).await
    }

    fn show_feature_panel(&self, region: RegionId, panel: &FeaturePanelState) {
        (**self).show_feature_panel(region, panel)
    }
}
