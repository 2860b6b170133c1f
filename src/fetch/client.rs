//! HTTP client for the standard routes endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::config::schema::SourceConfig;
use crate::fetch::types::{FetchError, FetchResult};
use crate::routes::types::StandardRoutes;

/// Authenticated client for one standard routes endpoint.
#[derive(Debug, Clone)]
pub struct StandardRoutesClient {
    client: Client,
    url: String,
    headers: HeaderMap,
}

impl StandardRoutesClient {
    /// Build a client from source settings.
    ///
    /// Fails if the key or header name cannot be encoded as an HTTP header.
    pub fn new(config: &SourceConfig) -> FetchResult<Self> {
        let name = HeaderName::from_bytes(config.api_key_header.as_bytes())
            .map_err(|e| FetchError::InvalidHeader(format!("'{}': {}", config.api_key_header, e)))?;
        let mut value = HeaderValue::from_str(config.api_key.trim())
            .map_err(|e| FetchError::InvalidHeader(format!("value for '{}': {}", config.api_key_header, e)))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(name, value);

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
            headers,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the single GET and parse the payload.
    pub async fn fetch(&self) -> FetchResult<StandardRoutes> {
        tracing::info!(url = %self.url, "Fetching standard routes");

        let resp = self
            .client
            .get(&self.url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::error!(url = %self.url, status = %status, "Standard routes request rejected");
            return Err(FetchError::Status { status, body: text });
        }

        let data: StandardRoutes = serde_json::from_str(&text)?;
        tracing::debug!(
            status = %status,
            bytes = text.len(),
            routes = data.routes.len(),
            "Standard routes received"
        );
        Ok(data)
    }
}
