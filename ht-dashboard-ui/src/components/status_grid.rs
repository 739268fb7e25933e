//! Per-disease status cards.

use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::alert::AlertLevel;
use ht_core::status::DiseaseStatus;

/// One card per disease, replaced wholesale on every poll.
#[component]
pub fn StatusGrid() -> Element {
    let state = use_context::<AppState>();
    let statuses = state.statuses.read().clone();

    rsx! {
        div {
            id: "statusGrid",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; margin: 12px 0;",
            for status in statuses {
                StatusCard { key: "{status.disease}", status }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusCardProps {
    pub status: DiseaseStatus,
}

#[component]
pub fn StatusCard(props: StatusCardProps) -> Element {
    let status = &props.status;
    let (_, border, _) = AlertLevel::from_case_count(status.current_cases).palette();
    let (arrow, trend_color) = if status.trend.is_increasing() {
        ("↑", "#e11d48")
    } else {
        ("↓", "#059669")
    };

    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 16px; border: 1px solid #e2e8f0; border-left: 4px solid {border};",
            p {
                style: "margin: 0; font-size: 13px; color: #64748b;",
                "{status.disease}"
            }
            p {
                style: "margin: 4px 0; font-size: 28px; font-weight: bold; color: #1e293b;",
                "{status.current_cases}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: {trend_color};",
                "{arrow} {status.trend.label()}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 11px; color: #94a3b8;",
                "As of {status.date}"
            }
        }
    }
}
