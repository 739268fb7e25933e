//! Shared Dioxus components and SciChart bridge for the HealthTrace dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the SciChart glue via `js_sys::eval()`
//! - `browser`: `fetch` transport, timer and CSV download
//! - `state`: Reactive AppState with Dioxus Signals
//! - `view`: the signal-backed view driven by the poller and controller
//! - `components`: Reusable RSX components (status cards, forecast panels, etc.)

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod view;
