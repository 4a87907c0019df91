/* src/server/adapter/axum/src/handler/read.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use vani_content::registry::{default_envelope, default_page};
use vani_content::{ContentError, ContentKey, DataSource, FetchOutcome, Locale, PageKey};

use super::{AppState, tagged};
use crate::error::AxumError;

pub(super) async fn handle_component(
  State(state): State<Arc<AppState>>,
  Path((locale, page_id, component_id)): Path<(String, String, String)>,
) -> Result<Response, AxumError> {
  let key = ContentKey::new(Locale::coerce(&locale), page_id, component_id)?;

  let secondary = match state.client().fetch_component(&key).await {
    FetchOutcome::Fetched(envelope) => return Ok(tagged(DataSource::Api, envelope)),
    FetchOutcome::Rejected { status, message } => {
      tracing::warn!(key = %key, status, message = %message, "serving fallback component");
      state.fallback().and_then(|store| store.component(&key)).cloned()
    }
    FetchOutcome::Unavailable { reason } => {
      tracing::warn!(key = %key, reason = %reason, "backend unavailable, serving default component");
      None
    }
  };

  secondary
    .or_else(|| default_envelope(&key))
    .map(|envelope| tagged(DataSource::Fallback, envelope))
    .ok_or_else(|| ContentError::not_found(format!("Content not found for {key}")).into())
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path((locale, page_id)): Path<(String, String)>,
) -> Result<Response, AxumError> {
  let key = PageKey::new(Locale::coerce(&locale), page_id)?;

  let secondary = match state.client().fetch_page(&key).await {
    FetchOutcome::Fetched(page) => return Ok(tagged(DataSource::Api, page)),
    FetchOutcome::Rejected { status, message } => {
      tracing::warn!(page = %key, status, message = %message, "serving fallback page");
      state.fallback().and_then(|store| store.page(&key)).cloned()
    }
    FetchOutcome::Unavailable { reason } => {
      tracing::warn!(page = %key, reason = %reason, "backend unavailable, serving default page");
      None
    }
  };

  secondary
    .or_else(|| default_page(&key))
    .map(|page| tagged(DataSource::Fallback, page))
    .ok_or_else(|| ContentError::not_found(format!("Page not found: {key}")).into())
}
