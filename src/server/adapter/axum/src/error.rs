/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vani_content::ContentError;

/// `IntoResponse` wrapper for `ContentError`, which lives in another crate.
pub(crate) struct AxumError(pub ContentError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "error": err.message(),
      "code": err.code(),
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<ContentError> for AxumError {
  fn from(err: ContentError) -> Self {
    Self(err)
  }
}
