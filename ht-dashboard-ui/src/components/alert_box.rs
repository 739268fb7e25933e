//! Forecast risk box.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn AlertBox() -> Element {
    let state = use_context::<AppState>();
    let Some(alert) = state.alert_box.read().clone() else {
        return rsx! {};
    };
    let (bg, border, text) = alert.level.palette();

    rsx! {
        div {
            id: "alertBox",
            style: "padding: 12px 16px; border-radius: 8px; background: {bg}; border: 1px solid {border}; color: {text};",
            h4 {
                style: "margin: 0 0 4px 0;",
                "{alert.heading()}"
            }
            p {
                style: "margin: 0; font-size: 14px;",
                "{alert.message}"
            }
        }
    }
}
