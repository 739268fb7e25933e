//! Tabbed feature-impact bars.

use super::RegionPlaceholder;
use crate::state::AppState;
use crate::view::FEATURES_REGION;
use dioxus::prelude::*;
use ht_core::features::FeaturePanelState;
use ht_core::view::RegionContent;

/// Tab bar plus one bar per feature of the active category.
///
/// Tabs are hidden unless the region is ready and there is at least one
/// category. Switching tabs is local and makes no request.
#[component]
pub fn FeaturePanel() -> Element {
    let mut state = use_context::<AppState>();
    let content = state.region(FEATURES_REGION.as_str());
    let panel = state.feature_panel.read().clone();

    let ready = content == Some(RegionContent::Ready);
    let tabs = match (ready, panel) {
        (true, Some(FeaturePanelState::Tabs(tabs))) => tabs,
        _ => {
            return rsx! {
                div {
                    id: FEATURES_REGION.as_str(),
                    RegionPlaceholder { content }
                }
            };
        }
    };

    rsx! {
        div {
            id: FEATURES_REGION.as_str(),
            nav {
                id: "featureTabsNav",
                style: "display: flex; gap: 4px; border-bottom: 1px solid #e2e8f0; margin-bottom: 12px;",
                for (index, name) in tabs.tab_names().enumerate() {
                    button {
                        key: "{name}",
                        style: if tabs.is_active(index) {
                            "padding: 6px 12px; border: none; border-bottom: 2px solid #0ea5e9; background: none; color: #0ea5e9; cursor: pointer;"
                        } else {
                            "padding: 6px 12px; border: none; border-bottom: 2px solid transparent; background: none; color: #64748b; cursor: pointer;"
                        },
                        onclick: move |_| {
                            state.feature_panel.with_mut(|panel| {
                                if let Some(FeaturePanelState::Tabs(panel)) = panel {
                                    panel.switch_to(index);
                                }
                            });
                        },
                        "{name}"
                    }
                }
            }
            div {
                for (index, feature) in tabs.active_category().features.iter().enumerate() {
                    div {
                        key: "{feature.bar_key(index)}",
                        style: "margin-bottom: 10px;",
                        div {
                            style: "display: flex; justify-content: space-between; font-size: 13px; color: #334155;",
                            span { "{feature.name}" }
                            span { "{feature.impact_label()}" }
                        }
                        div {
                            style: "height: 8px; background: #f1f5f9; border-radius: 4px; overflow: hidden;",
                            div {
                                style: "height: 100%; width: {feature.bar_width()}%; background: {feature.band().color()};",
                            }
                        }
                    }
                }
            }
        }
    }
}
