//! Forecast window, peak and last-updated figures.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn StatisticsPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(stats) = state.statistics.read().clone() else {
        return rsx! {};
    };
    let window = stats.window.clone().unwrap_or_else(|| "-".to_string());
    let peak = stats.peak_display();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin: 12px 0;",
            Stat { label: "Forecast Period", value: window, id: "forecastPeriod" }
            Stat { label: "Peak Predicted Cases", value: peak, id: "peakCases" }
            Stat { label: "Last Updated", value: stats.last_updated, id: "lastUpdated" }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String, id: &'static str) -> Element {
    rsx! {
        div {
            style: "background: white; border-radius: 8px; padding: 12px; border: 1px solid #e2e8f0;",
            p {
                style: "margin: 0; font-size: 12px; color: #64748b;",
                "{label}"
            }
            p {
                id: "{id}",
                style: "margin: 4px 0 0 0; font-size: 18px; font-weight: bold; color: #1e293b;",
                "{value}"
            }
        }
    }
}
