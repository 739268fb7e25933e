//! Reusable Dioxus RSX components for the HealthTrace dashboard.

mod alert_banner;
mod alert_box;
mod chart_container;
mod disease_selector;
mod error_display;
mod export_button;
mod feature_panel;
mod forecast_table;
mod loading_spinner;
mod model_selector;
mod region_placeholder;
mod statistics_panel;
mod status_grid;

pub use alert_banner::AlertBanner;
pub use alert_box::AlertBox;
pub use chart_container::ChartContainer;
pub use disease_selector::DiseaseSelector;
pub use error_display::ErrorDisplay;
pub use export_button::ExportButton;
pub use feature_panel::FeaturePanel;
pub use forecast_table::ForecastTable;
pub use loading_spinner::LoadingSpinner;
pub use model_selector::ModelSelector;
pub use region_placeholder::RegionPlaceholder;
pub use statistics_panel::StatisticsPanel;
pub use status_grid::{StatusCard, StatusGrid};
