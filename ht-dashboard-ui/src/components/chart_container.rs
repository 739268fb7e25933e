//! Chart container component with region placeholder overlay.

use super::RegionPlaceholder;
use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::view::RegionContent;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (SciChart will render into this)
    pub id: String,
    #[props(default = String::new())]
    pub title: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for SciChart surfaces.
///
/// The target div is always mounted so a render can find it; loading,
/// failure and empty messages are drawn over it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let content = state.region(&props.id);
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let overlay = content
        .as_ref()
        .is_some_and(|c| !matches!(c, RegionContent::Ready));

    rsx! {
        div {
            style: "background: white; border-radius: 12px; padding: 16px; border: 1px solid #e2e8f0;",
            if !props.title.is_empty() {
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 16px; color: #1e293b;",
                    "{props.title}"
                }
            }
            div {
                style: "{style}",
                if overlay {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 1; background: rgba(255,255,255,0.9);",
                        RegionPlaceholder { content }
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%; height: {props.min_height}px;",
                }
            }
        }
    }
}
