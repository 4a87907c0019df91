/* src/server/client/rust/src/config.rs */

use std::time::Duration;

use reqwest::Url;

use crate::error::FetchError;

/// Used when neither the environment nor configuration names a backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
/// Reads that take longer than this are aborted and treated as hard failures.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upstream of the server-side proxy.
pub const BACKEND_URL_ENV: &str = "BACKEND_API_URL";
/// Upstream for clients talking to the backend directly.
pub const PUBLIC_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  /// No trailing slash.
  pub base_url: String,
  pub timeout: Duration,
}

impl ClientConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url: String = base_url.into();
    Self { base_url: base_url.trim_end_matches('/').to_string(), timeout: DEFAULT_TIMEOUT }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Endpoint under the base URL. Every segment is percent-encoded on its own,
  /// so `/`, `?` and `#` inside an id never leave that id's segment.
  pub fn endpoint<I>(&self, segments: I) -> Result<Url, FetchError>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let invalid = |reason: String| FetchError::InvalidUrl { url: self.base_url.clone(), reason };
    let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
    url
      .path_segments_mut()
      .map_err(|_| invalid("cannot be a base URL".to_string()))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self::new(DEFAULT_BACKEND_URL)
  }
}
