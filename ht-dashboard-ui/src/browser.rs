//! Browser-side plumbing: `fetch` transport, timer and file download.

use ht_core::api::{Fetch, FetchResponse};
use ht_core::error::{DashboardError, Result};
use ht_core::export::CsvArtifact;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Request, RequestInit, RequestMode, Response, Url};

pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> DashboardError {
    DashboardError::Network(describe(&value))
}

fn browser_error(value: JsValue) -> DashboardError {
    DashboardError::Browser(describe(&value))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| DashboardError::Browser("no window".to_string()))
}

/// [`Fetch`] over `window.fetch`, resolving paths against `base_url`.
#[derive(Debug, Clone, Default)]
pub struct BrowserFetch {
    base_url: String,
}

impl BrowserFetch {
    /// An empty base URL means same-origin requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Fetch for BrowserFetch {
    async fn get(&self, path: &str) -> Result<FetchResponse> {
        let window = window()?;
        let url = format!("{}{}", self.base_url, path);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = response_value.dyn_into().map_err(network_error)?;

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?
            .as_string()
            .unwrap_or_default();

        Ok(FetchResponse {
            status: response.status(),
            body,
        })
    }
}

/// Resolve after `duration` using `setTimeout`.
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Hand `artifact` to the browser as a file download.
pub fn download(artifact: &CsvArtifact) -> Result<()> {
    let document = window()?
        .document()
        .ok_or_else(|| DashboardError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&artifact.contents));
    let props = BlobPropertyBag::new();
    props.set_type(artifact.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(browser_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| DashboardError::Browser("anchor element cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(browser_error)?;
    log::info!("Exported {}", artifact.file_name);
    Ok(())
}
