/* src/server/client/rust/src/client.rs */

use reqwest::Url;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use vani_content::{ContentKey, FetchOutcome, PageEnvelope, PageKey};

use crate::config::ClientConfig;
use crate::error::{FetchError, error_message};

/// HTTP client for the backend's page-content endpoints.
///
/// Reads are single attempts bounded by the configured timeout and never
/// return an error: they are classified into a [`FetchOutcome`]. Writes
/// return every failure to the caller.
#[derive(Debug, Clone)]
pub struct ContentClient {
  pub(crate) http: reqwest::Client,
  pub(crate) config: ClientConfig,
}

impl ContentClient {
  pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { http, config })
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// `{base}/page-content/{locale}/{pageId}/{componentId}`, ids percent-encoded.
  pub fn component_url(&self, key: &ContentKey) -> Result<Url, FetchError> {
    self.config.endpoint(key.segments())
  }

  /// `{base}/page-content/{locale}/{pageId}`
  pub fn page_url(&self, key: &PageKey) -> Result<Url, FetchError> {
    self.config.endpoint(key.segments())
  }

  /// `GET` one component.
  pub async fn fetch_component(&self, key: &ContentKey) -> FetchOutcome {
    self.read(self.component_url(key)).await
  }

  /// `GET` a whole page.
  pub async fn fetch_page(&self, key: &PageKey) -> FetchOutcome<PageEnvelope> {
    self.read(self.page_url(key)).await
  }

  async fn read<T: DeserializeOwned>(&self, url: Result<Url, FetchError>) -> FetchOutcome<T> {
    let url = match url {
      Ok(url) => url,
      Err(err) => {
        tracing::warn!(error = %err, "page content read skipped");
        return FetchOutcome::Unavailable { reason: err.to_string() };
      }
    };
    tracing::debug!(url = %url, "fetching page content");
    let request =
      self.http.get(url.clone()).header(CACHE_CONTROL, "no-cache").header(PRAGMA, "no-cache");
    match self.execute(request).await {
      Ok(value) => FetchOutcome::Fetched(value),
      Err(FetchError::Server { status, message }) => {
        tracing::warn!(url = %url, status, message = %message, "page content read rejected");
        FetchOutcome::Rejected { status, message }
      }
      Err(err) => {
        tracing::warn!(url = %url, error = %err, "page content read failed");
        FetchOutcome::Unavailable { reason: err.to_string() }
      }
    }
  }

  /// Send one request and decode a 2xx JSON body.
  pub(crate) async fn execute<T: DeserializeOwned>(
    &self,
    request: reqwest::RequestBuilder,
  ) -> Result<T, FetchError> {
    let timeout = self.config.timeout;
    let resp = request.send().await.map_err(|e| FetchError::transport(e, timeout))?;
    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(FetchError::Server { status: status.as_u16(), message: error_message(&body, status) });
    }
    let bytes = resp.bytes().await.map_err(|e| FetchError::transport(e, timeout))?;
    Ok(serde_json::from_slice(&bytes)?)
  }
}
