/* src/server/client/rust/src/write.rs */

use reqwest::Url;
use serde::de::DeserializeOwned;
use vani_content::{ContentEnvelope, ContentError, ContentKey, PageEnvelope, PageKey};

use crate::client::ContentClient;

/// Attach `Authorization: Bearer` only for a real token; never send it empty.
fn authorize(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
  match token.map(str::trim).filter(|t| !t.is_empty()) {
    Some(token) => request.bearer_auth(token),
    None => request,
  }
}

impl ContentClient {
  /// `PATCH` partial fields of one component. The backend echoes the updated envelope.
  pub async fn update_component(
    &self,
    key: &ContentKey,
    patch: &serde_json::Value,
    token: Option<&str>,
  ) -> Result<ContentEnvelope, ContentError> {
    let url = self.component_url(key)?;
    let request = authorize(self.http.patch(url.clone()).json(patch), token);
    self.write(&url, "PATCH", request).await
  }

  /// `PUT` a whole page, replacing every component.
  pub async fn replace_page(
    &self,
    key: &PageKey,
    page: &serde_json::Value,
    token: Option<&str>,
  ) -> Result<PageEnvelope, ContentError> {
    let url = self.page_url(key)?;
    let request = authorize(self.http.put(url.clone()).json(page), token);
    self.write(&url, "PUT", request).await
  }

  async fn write<T: DeserializeOwned>(
    &self,
    url: &Url,
    method: &str,
    request: reqwest::RequestBuilder,
  ) -> Result<T, ContentError> {
    tracing::info!(url = %url, method, "writing page content");
    self.execute(request).await.map_err(|err| {
      tracing::error!(url = %url, method, error = %err, "page content write failed");
      ContentError::from(err)
    })
  }
}
