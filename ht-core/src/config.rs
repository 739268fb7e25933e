//! Dashboard configuration shared by the WASM app and the CLI.

use crate::forecast::ModelType;
use std::time::Duration;

/// How often the status cards and banner refresh.
pub const STATUS_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Browser bundle exposing the `SciChart` global.
pub const DEFAULT_CHART_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/scichart@4.0.897/index.min.js";

/// WASM asset location for the SciChart collaborator.
pub const DEFAULT_CHART_WASM_URL: &str =
    "https://cdn.jsdelivr.net/npm/scichart@4.0.897/_wasm/scichart2d.wasm";

/// Diseases the forecasting backend serves models for.
pub const DEFAULT_DISEASES: [&str; 3] = ["Dengue", "Typhoid", "Cholera"];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    pub status_interval: Duration,
    pub chart_script_url: String,
    pub chart_wasm_url: String,
    /// Whether the hosting page has a climate chart region
    pub climate_region: bool,
    pub model_type: ModelType,
    /// Disease buttons to offer before the first status poll answers
    pub diseases: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_interval: STATUS_REFRESH_INTERVAL,
            chart_script_url: DEFAULT_CHART_SCRIPT_URL.to_string(),
            chart_wasm_url: DEFAULT_CHART_WASM_URL.to_string(),
            climate_region: true,
            model_type: ModelType::default(),
            diseases: DEFAULT_DISEASES.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_climate_region(mut self, present: bool) -> Self {
        self.climate_region = present;
        self
    }

    pub fn with_model_type(mut self, model_type: ModelType) -> Self {
        self.model_type = model_type;
        self
    }

    pub fn with_status_interval(mut self, interval: Duration) -> Self {
        self.status_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_poll_every_five_minutes() {
        let config = DashboardConfig::default();
        assert_eq!(config.status_interval, Duration::from_secs(300));
        assert!(config.api_base.is_empty());
        assert_eq!(config.model_type, ModelType::Lstm);
    }

    #[test]
    fn disease_buttons_exist_before_first_status_poll() {
        let config = DashboardConfig::default();
        assert_eq!(config.diseases, vec!["Dengue", "Typhoid", "Cholera"]);
    }

    #[test]
    fn api_base_drops_trailing_slash() {
        let config = DashboardConfig::default().with_api_base("http://localhost:5000/");
        assert_eq!(config.api_base, "http://localhost:5000");
    }
}
