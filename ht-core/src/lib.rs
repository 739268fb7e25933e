//! Core of the HealthTrace outbreak dashboard.
//!
//! Holds the backend data model, the alert and impact policies, chart and CSV
//! builders, and the two orchestrators that drive a view: [`poller::StatusPoller`]
//! for the periodic status refresh and [`controller::ForecastController`] for
//! per-disease forecast selection. Nothing here depends on a UI toolkit or an
//! async runtime.

pub mod alert;
pub mod api;
pub mod chart;
pub mod climate;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod features;
pub mod forecast;
pub mod poller;
#[cfg(feature = "api")]
pub mod reqwest_fetch;
pub mod status;
pub mod subscription;
pub mod timestamp;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DashboardError, Result};
