/* src/server/adapter/axum/src/handler/write.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::response::Response;
use vani_content::token::request_token;
use vani_content::{ContentError, ContentKey, DataSource, Locale, PageKey};

use super::{AppState, header, tagged};
use crate::error::AxumError;

/// Token forwarded upstream. A present token must satisfy the verifier.
fn caller_token<'a>(
  state: &AppState,
  headers: &'a HeaderMap,
) -> Result<Option<&'a str>, ContentError> {
  let token = request_token(header(headers, AUTHORIZATION), header(headers, COOKIE));
  match token {
    Some(token) if !state.verifier.verify(token) => {
      tracing::warn!("rejected write with invalid token");
      Err(ContentError::unauthorized("Invalid or expired token"))
    }
    _ => Ok(token),
  }
}

fn json_body(body: &[u8]) -> Result<serde_json::Value, ContentError> {
  let value: serde_json::Value = serde_json::from_slice(body)
    .map_err(|e| ContentError::validation(format!("Invalid JSON body: {e}")))?;
  if !value.is_object() {
    return Err(ContentError::validation("Request body must be a JSON object"));
  }
  Ok(value)
}

pub(super) async fn handle_patch(
  State(state): State<Arc<AppState>>,
  Path((locale, page_id, component_id)): Path<(String, String, String)>,
  headers: HeaderMap,
  body: axum::body::Bytes,
) -> Result<Response, AxumError> {
  let key = ContentKey::new(Locale::coerce(&locale), page_id, component_id)?;
  let token = caller_token(&state, &headers)?;
  let patch = json_body(&body)?;

  let updated = state.client().update_component(&key, &patch, token).await?;
  Ok(tagged(DataSource::Api, updated))
}

pub(super) async fn handle_put(
  State(state): State<Arc<AppState>>,
  Path((locale, page_id)): Path<(String, String)>,
  headers: HeaderMap,
  body: axum::body::Bytes,
) -> Result<Response, AxumError> {
  let key = PageKey::new(Locale::coerce(&locale), page_id)?;
  let token = caller_token(&state, &headers)?;
  let page = json_body(&body)?;

  let replaced = state.client().replace_page(&key, &page, token).await?;
  Ok(tagged(DataSource::Api, replaced))
}
