/* src/server/client/rust/src/error.rs */

use std::time::Duration;

use thiserror::Error;
use vani_content::ContentError;

#[derive(Error, Debug)]
pub enum FetchError {
  #[error("HTTP request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("request timed out after {0:?}")]
  Timeout(Duration),
  #[error("server returned {status}: {message}")]
  Server { status: u16, message: String },
  #[error("JSON parse error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("invalid backend URL \"{url}\": {reason}")]
  InvalidUrl { url: String, reason: String },
}

impl FetchError {
  pub(crate) fn transport(err: reqwest::Error, timeout: Duration) -> Self {
    if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
  }
}

impl From<FetchError> for ContentError {
  fn from(err: FetchError) -> Self {
    match err {
      FetchError::Http(_) | FetchError::Timeout(_) => ContentError::upstream_unavailable(),
      FetchError::Server { status, message } => ContentError::upstream_rejected(status, message),
      FetchError::Json(e) => {
        ContentError::upstream_rejected(502, format!("invalid response from backend: {e}"))
      }
      err @ FetchError::InvalidUrl { .. } => ContentError::internal(err.to_string()),
    }
  }
}

/// Human-readable message from an error body: `{"error": ...}`, `{"message": ...}`,
/// the raw text, or the status reason when the body is empty.
pub(crate) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
  if let Ok(serde_json::Value::Object(obj)) = serde_json::from_str::<serde_json::Value>(body) {
    for field in ["error", "message"] {
      match obj.get(field) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => return s.clone(),
        Some(serde_json::Value::Object(inner)) => {
          if let Some(s) = inner.get("message").and_then(|m| m.as_str()) {
            return s.to_string();
          }
        }
        _ => {}
      }
    }
  }
  let trimmed = body.trim();
  if trimmed.is_empty() {
    status.canonical_reason().unwrap_or("request failed").to_string()
  } else {
    trimmed.to_string()
  }
}
