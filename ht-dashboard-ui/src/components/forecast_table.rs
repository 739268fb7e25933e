//! Tabular forecast with per-row trend marker.

use crate::state::AppState;
use dioxus::prelude::*;
use ht_core::forecast::{format_count, ForecastTable as Table};

#[component]
pub fn ForecastTable() -> Element {
    let state = use_context::<AppState>();
    let Some(table) = state.table.read().clone() else {
        return rsx! {};
    };

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px; background: white;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #e2e8f0;", "Date" }
                    th { style: "text-align: right; padding: 8px; border-bottom: 1px solid #e2e8f0;", "Predicted Cases" }
                    th { style: "text-align: center; padding: 8px; border-bottom: 1px solid #e2e8f0;", "Trend" }
                }
            }
            tbody {
                id: "forecastDataTableBody",
                {match table {
                    Table::Empty => rsx! {
                        tr {
                            td {
                                colspan: "3",
                                style: "padding: 16px; text-align: center; color: #94a3b8;",
                                {Table::EMPTY_MESSAGE}
                            }
                        }
                    },
                    Table::Rows(rows) => rsx! {
                        for row in rows {
                            tr {
                                key: "{row.date}",
                                td { style: "padding: 8px;", "{row.date}" }
                                td { style: "padding: 8px; text-align: right;", "{format_count(row.predicted)}" }
                                td {
                                    style: if row.rising { "padding: 8px; text-align: center; color: #e11d48;" } else { "padding: 8px; text-align: center; color: #059669;" },
                                    "{row.trend_marker()}"
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
