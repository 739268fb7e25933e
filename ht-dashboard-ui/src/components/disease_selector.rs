//! One button per disease.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DiseaseSelectorProps {
    pub on_select: EventHandler<String>,
}

/// Disease buttons; the selected one is highlighted.
#[component]
pub fn DiseaseSelector(props: DiseaseSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let diseases = state.diseases.read().clone();
    let selected = state.selected_disease.read().clone();

    rsx! {
        div {
            id: "diseaseButtonsContainer",
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin: 8px 0;",
            for disease in diseases {
                button {
                    key: "{disease}",
                    style: if selected.as_deref() == Some(disease.as_str()) {
                        "padding: 8px 16px; border-radius: 8px; border: 1px solid #0ea5e9; background: #0ea5e9; color: white; cursor: pointer;"
                    } else {
                        "padding: 8px 16px; border-radius: 8px; border: 1px solid #e2e8f0; background: white; color: #334155; cursor: pointer;"
                    },
                    onclick: {
                        let disease = disease.clone();
                        move |_| props.on_select.call(disease.clone())
                    },
                    "{disease}"
                }
            }
        }
    }
}
