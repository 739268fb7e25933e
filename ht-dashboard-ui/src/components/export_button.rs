//! CSV export button.

use crate::browser;
use crate::state::AppState;
use dioxus::prelude::*;

/// Disabled until a forecast has loaded.
#[component]
pub fn ExportButton() -> Element {
    let state = use_context::<AppState>();
    let artifact = state.export.read().clone();
    let enabled = artifact.is_some();

    rsx! {
        button {
            id: "exportCsvBtn",
            disabled: !enabled,
            style: if enabled {
                "padding: 8px 16px; border-radius: 8px; border: 1px solid #0ea5e9; background: white; color: #0ea5e9; cursor: pointer;"
            } else {
                "padding: 8px 16px; border-radius: 8px; border: 1px solid #e2e8f0; background: #f8fafc; color: #94a3b8; cursor: not-allowed;"
            },
            onclick: move |_| {
                if let Some(artifact) = artifact.as_ref() {
                    if let Err(e) = browser::download(artifact) {
                        log::error!("CSV export failed: {}", e);
                    }
                }
            },
            "Export CSV"
        }
    }
}
