//! Typed client for the HealthTrace backend API.
//!
//! The HTTP transport is abstracted behind [`Fetch`] so the same client runs
//! in the browser (web-sys `fetch`) and natively (`reqwest`, behind the `api`
//! feature).
//!
//! # Endpoints
//!
//! - `GET /api/current_status` → `[DiseaseStatus]`
//! - `GET /api/forecast/{disease}?model_type=lstm|gru` → `ForecastPayload | {error}`
//! - `GET /api/climate_data/{disease}` → `ClimateData | {error}`
//! - `GET /api/feature_factors/{disease}` → `FeatureFactorData | {error}`
//! - `GET /api/compare_models/{disease}` → `ModelComparison | {error}`

use crate::climate::ClimateData;
use crate::error::{DashboardError, Result};
use crate::features::FeatureFactorData;
use crate::forecast::{ForecastPayload, ModelComparison, ModelType};
use crate::status::DiseaseStatus;
use serde::de::DeserializeOwned;

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An HTTP GET transport.
///
/// Implementations resolve `path` against their own base URL and report
/// transport failures as [`DashboardError::Network`]. A non-2xx status is not
/// an error at this level; the client decides based on the body.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, path: &str) -> Result<FetchResponse>;
}

impl<T: Fetch> Fetch for &T {
    async fn get(&self, path: &str) -> Result<FetchResponse> {
        (**self).get(path).await
    }
}

impl<T: Fetch> Fetch for std::rc::Rc<T> {
    async fn get(&self, path: &str) -> Result<FetchResponse> {
        (**self).get(path).await
    }
}

/// Backend routes.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    CurrentStatus,
    Forecast(&'a str, ModelType),
    ClimateData(&'a str),
    FeatureFactors(&'a str),
    CompareModels(&'a str),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::CurrentStatus => "/api/current_status".to_string(),
            Endpoint::Forecast(disease, model) => format!(
                "/api/forecast/{}?model_type={}",
                encode_segment(disease),
                model.query_value()
            ),
            Endpoint::ClimateData(disease) => {
                format!("/api/climate_data/{}", encode_segment(disease))
            }
            Endpoint::FeatureFactors(disease) => {
                format!("/api/feature_factors/{}", encode_segment(disease))
            }
            Endpoint::CompareModels(disease) => {
                format!("/api/compare_models/{}", encode_segment(disease))
            }
        }
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode a response body.
///
/// A JSON object with an `error` field wins over everything else, since the
/// backend pairs it with 404/500 statuses. Otherwise a non-2xx status is an
/// [`DashboardError::Http`] error, and a 2xx body must match `T`.
pub fn decode_response<T: DeserializeOwned>(response: &FetchResponse) -> Result<T> {
    let value: serde_json::Value = match serde_json::from_str(&response.body) {
        Ok(v) => v,
        Err(e) if response.is_success() => return Err(DashboardError::Decode(e.to_string())),
        Err(_) => {
            return Err(DashboardError::Http {
                status: response.status,
            })
        }
    };

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(DashboardError::Payload(message));
    }

    if !response.is_success() {
        return Err(DashboardError::Http {
            status: response.status,
        });
    }

    Ok(serde_json::from_value(value)?)
}

/// Typed wrapper over a [`Fetch`] transport.
#[derive(Debug, Clone)]
pub struct ApiClient<F> {
    fetch: F,
}

impl<F: Fetch> ApiClient<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }

    pub fn transport(&self) -> &F {
        &self.fetch
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let path = endpoint.path();
        log::debug!("GET {}", path);
        let response = self.fetch.get(&path).await?;
        decode_response(&response)
    }

    pub async fn current_status(&self) -> Result<Vec<DiseaseStatus>> {
        self.get_json(Endpoint::CurrentStatus).await
    }

    /// Fetch and validate a forecast.
    pub async fn forecast(&self, disease: &str, model: ModelType) -> Result<ForecastPayload> {
        let payload: ForecastPayload = self.get_json(Endpoint::Forecast(disease, model)).await?;
        payload.validate()?;
        Ok(payload)
    }

    pub async fn climate_data(&self, disease: &str) -> Result<ClimateData> {
        let data: ClimateData = self.get_json(Endpoint::ClimateData(disease)).await?;
        data.validate()?;
        Ok(data)
    }

    pub async fn feature_factors(&self, disease: &str) -> Result<FeatureFactorData> {
        self.get_json(Endpoint::FeatureFactors(disease)).await
    }

    pub async fn compare_models(&self, disease: &str) -> Result<ModelComparison> {
        let comparison: ModelComparison =
            self.get_json(Endpoint::CompareModels(disease)).await?;
        comparison.validate()?;
        Ok(comparison)
    }
}
