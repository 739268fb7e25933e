//! Page-level alert banner.

use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::alert::Banner;

#[component]
pub fn AlertBanner() -> Element {
    let state = use_context::<AppState>();
    let banner = state.banner.read().clone();

    match banner {
        None => rsx! {},
        Some(Banner::ConnectivityError) => rsx! {
            div {
                id: "alertBanner",
                style: "padding: 12px 16px; border-radius: 8px; background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c;",
                {Banner::CONNECTIVITY_MESSAGE}
            }
        },
        Some(Banner::Alert(alert)) => {
            let (bg, border, text) = alert.level.palette();
            rsx! {
                div {
                    id: "alertBanner",
                    style: "padding: 12px 16px; border-radius: 8px; background: {bg}; border: 1px solid {border}; color: {text};",
                    strong { "{alert.title()} " }
                    "{alert.message()}"
                }
            }
        }
    }
}
