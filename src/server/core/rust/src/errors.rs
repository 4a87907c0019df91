/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Message returned to writers when the backend cannot be reached at all.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
  "Backend unavailable. Please ensure the backend server is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "UNAUTHORIZED" => 401,
    "NOT_FOUND" => 404,
    "UPSTREAM_REJECTED" => 502,
    "UPSTREAM_UNAVAILABLE" => 503,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl ContentError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn unauthorized(msg: impl Into<String>) -> Self {
    Self::with_code("UNAUTHORIZED", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  /// Network error or timeout on the write path. Reads never surface this.
  pub fn upstream_unavailable() -> Self {
    Self::with_code("UPSTREAM_UNAVAILABLE", BACKEND_UNAVAILABLE_MESSAGE)
  }

  /// Backend answered with a non-2xx status; the status is passed through.
  /// 4xx bodies that the backend rejected are reported as validation failures.
  pub fn upstream_rejected(status: u16, msg: impl Into<String>) -> Self {
    let code = match status {
      400 | 422 => "VALIDATION_ERROR",
      401 | 403 => "UNAUTHORIZED",
      404 => "NOT_FOUND",
      _ => "UPSTREAM_REJECTED",
    };
    let status = if (400..600).contains(&status) { status } else { default_status(code) };
    Self::new(code, msg, status)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for ContentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for ContentError {}
