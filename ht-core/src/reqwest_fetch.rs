//! Native [`Fetch`] transport over reqwest, used by the CLI.

use crate::api::{Fetch, FetchResponse};
use crate::error::{DashboardError, Result};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    client: Client,
    base_url: String,
}

impl ReqwestFetch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Fetch for ReqwestFetch {
    async fn get(&self, path: &str) -> Result<FetchResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("{url}: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Network(format!("{url}: {e}")))?;
        Ok(FetchResponse { status, body })
    }
}
