//! Inline loading / failure / empty message for one region.

use super::{ErrorDisplay, LoadingSpinner};
use dioxus::prelude::*;
use ht_core::view::RegionContent;

#[derive(Props, Clone, PartialEq)]
pub struct RegionPlaceholderProps {
    #[props(!optional)]
    pub content: Option<RegionContent>,
}

/// Renders nothing for `Ready` or an untouched region.
#[component]
pub fn RegionPlaceholder(props: RegionPlaceholderProps) -> Element {
    match props.content {
        Some(RegionContent::Loading(message)) => rsx! {
            LoadingSpinner { message }
        },
        Some(RegionContent::Failed(message)) => rsx! {
            ErrorDisplay { message }
        },
        Some(RegionContent::Empty(message)) => rsx! {
            p {
                style: "padding: 24px; text-align: center; color: #94a3b8; font-size: 14px;",
                "{message}"
            }
        },
        Some(RegionContent::Ready) | None => rsx! {},
    }
}
