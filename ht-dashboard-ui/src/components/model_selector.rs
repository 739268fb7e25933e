//! Dropdown selector for the forecasting model.

use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::forecast::ModelType;

/// LSTM / GRU dropdown. Applies to the next disease selection.
#[component]
pub fn ModelSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.model_type)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<ModelType>() {
        Ok(model) => state.model_type.set(model),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "model-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Model: "
            }
            select {
                id: "model-select",
                onchange: on_change,
                for model in [ModelType::Lstm, ModelType::Gru] {
                    option {
                        value: "{model.query_value()}",
                        selected: model == current,
                        "{model.label()}"
                    }
                }
            }
        }
    }
}
