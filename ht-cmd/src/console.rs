//! Plain-text rendering of dashboard views.

use ht_core::alert::Banner;
use ht_core::chart::ChartSpec;
use ht_core::error::Result;
use ht_core::export::CsvArtifact;
use ht_core::features::FeaturePanelState;
use ht_core::forecast::{format_count, ForecastAlert, ForecastStats, ForecastTable, ModelComparison};
use ht_core::status::DiseaseStatus;
use ht_core::view::{ForecastView, RegionContent, RegionId, Regions, StatusView};
use std::cell::RefCell;

pub const FORECAST_REGION: RegionId = RegionId("forecast");
pub const FEATURES_REGION: RegionId = RegionId("features");
pub const CLIMATE_REGION: RegionId = RegionId("climate");

const BAR_WIDTH: usize = 30;

pub fn format_status_card(status: &DiseaseStatus) -> String {
    let arrow = if status.trend.is_increasing() { "↑" } else { "↓" };
    format!(
        "{:<20} {:>8}  {} {:<10} as of {}",
        status.disease,
        status.current_cases,
        arrow,
        status.trend.label(),
        status.date
    )
}

pub fn format_banner(banner: &Banner) -> String {
    match banner {
        Banner::Alert(alert) => format!("{} {}", alert.title(), alert.message()),
        Banner::ConnectivityError => Banner::CONNECTIVITY_MESSAGE.to_string(),
    }
}

pub fn format_table(table: &ForecastTable) -> Vec<String> {
    match table {
        ForecastTable::Empty => vec![ForecastTable::EMPTY_MESSAGE.to_string()],
        ForecastTable::Rows(rows) => rows
            .iter()
            .map(|row| {
                format!(
                    "{:<12} {:>10} {}",
                    row.date,
                    format_count(row.predicted),
                    row.trend_marker()
                )
            })
            .collect(),
    }
}

/// Every category with one text bar per feature.
pub fn format_feature_panel(panel: &FeaturePanelState) -> Vec<String> {
    let tabs = match panel {
        FeaturePanelState::Empty => return vec![FeaturePanelState::EMPTY_MESSAGE.to_string()],
        FeaturePanelState::Tabs(tabs) => tabs,
    };
    let mut lines = Vec::new();
    for category in tabs.categories() {
        lines.push(format!("[{}]", category.name));
        for feature in &category.features {
            let filled = (feature.bar_width() / 100.0 * BAR_WIDTH as f64).round() as usize;
            lines.push(format!(
                "  {:<24} {}{} {} ({:?})",
                feature.name,
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                feature.impact_label(),
                feature.band()
            ));
        }
    }
    lines
}

pub fn format_comparison(comparison: &ModelComparison) -> Vec<String> {
    let summary = &comparison.comparison;
    let mut lines = vec![format!("{:<12} {:>10} {:>10}", "Date", "LSTM", "GRU")];
    lines.extend(comparison.rows().map(|(date, lstm, gru)| {
        format!("{:<12} {:>10} {:>10}", date, format_count(lstm), format_count(gru))
    }));
    lines.push(format!(
        "avg LSTM {:.1}, avg GRU {:.1}, avg difference {:.1}, max difference {:.1}",
        summary.lstm_avg, summary.gru_avg, summary.avg_difference, summary.max_difference
    ));
    lines
}

/// Writes every view update as lines of text.
///
/// Lines are kept for inspection and, when `echo` is set, printed to stdout.
pub struct ConsoleView {
    echo: bool,
    has_climate: bool,
    lines: RefCell<Vec<String>>,
}

impl ConsoleView {
    pub fn new(has_climate: bool) -> Self {
        Self {
            echo: true,
            has_climate,
            lines: RefCell::new(Vec::new()),
        }
    }

    /// Collect lines without printing them.
    pub fn quiet(has_climate: bool) -> Self {
        Self {
            echo: false,
            ..Self::new(has_climate)
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn emit(&self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{}", line);
        }
        self.lines.borrow_mut().push(line);
    }

    fn emit_all(&self, lines: Vec<String>) {
        for line in lines {
            self.emit(line);
        }
    }
}

impl StatusView for ConsoleView {
    fn show_status_cards(&self, statuses: &[DiseaseStatus]) {
        for status in statuses {
            self.emit(format_status_card(status));
        }
    }

    fn show_banner(&self, banner: &Banner) {
        self.emit(format_banner(banner));
    }
}

impl ForecastView for ConsoleView {
    fn regions(&self) -> Regions {
        Regions {
            forecast: FORECAST_REGION,
            features: FEATURES_REGION,
            climate: self.has_climate.then_some(CLIMATE_REGION),
        }
    }

    fn show_selected(&self, disease: &str) {
        self.emit(format!("== {} ==", disease));
    }

    fn set_region(&self, region: RegionId, content: RegionContent) {
        match content {
            RegionContent::Loading(message) => log::info!("{}", message),
            RegionContent::Failed(message) => self.emit(format!("[{}] {}", region.as_str(), message)),
            RegionContent::Empty(message) => self.emit(format!("[{}] {}", region.as_str(), message)),
            RegionContent::Ready => log::debug!("{} ready", region.as_str()),
        }
    }

    fn show_alert_box(&self, alert: &ForecastAlert) {
        self.emit(format!("{}: {}", alert.heading(), alert.message));
    }

    fn show_statistics(&self, stats: &ForecastStats) {
        self.emit(format!(
            "Forecast period: {}",
            stats.window.as_deref().unwrap_or("-")
        ));
        self.emit(format!("Peak predicted cases: {}", stats.peak_display()));
        self.emit(format!("Last updated: {}", stats.last_updated));
    }

    fn show_table(&self, table: &ForecastTable) {
        self.emit_all(format_table(table));
    }

    // printed lines stay; the next summary follows the new heading
    fn clear_summary(&self) {}

    fn set_export(&self, artifact: Option<CsvArtifact>) {
        if let Some(artifact) = artifact {
            log::debug!("Export ready: {}", artifact.file_name);
        }
    }

    async fn render_chart(&self, region: RegionId, spec: &ChartSpec) -> Result<()> {
        let names: Vec<&str> = spec.series.iter().map(|s| s.name).collect();
        self.emit(format!(
            "[{}] {} ({} points)",
            region.as_str(),
            names.join(", "),
            spec.point_count()
        ));
        Ok(())
    }

    fn show_feature_panel(&self, _region: RegionId, panel: &FeaturePanelState) {
        if panel.tabs_visible() {
            self.emit_all(format_feature_panel(panel));
        }
    }
}
