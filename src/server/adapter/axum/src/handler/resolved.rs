/* src/server/adapter/axum/src/handler/resolved.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use vani_content::registry::lookup;
use vani_content::{ContentError, ContentKey, Locale};

use super::{AppState, tagged};
use crate::error::AxumError;

/// Merged, render-safe content for a registered component.
pub(super) async fn handle_resolved(
  State(state): State<Arc<AppState>>,
  Path((locale, page_id, component_id)): Path<(String, String, String)>,
) -> Result<Response, AxumError> {
  let key = ContentKey::new(Locale::coerce(&locale), page_id, component_id)?;
  let entry = lookup(&key.page_id, &key.component_id)
    .ok_or_else(|| ContentError::not_found(format!("No content shape registered for {key}")))?;

  let resolution = state.resolver.resolve_kind(entry.kind, &key).await;
  let source = resolution.source;
  Ok(tagged(
    source,
    serde_json::json!({
      "kind": entry.kind,
      "locale": key.locale,
      "content": resolution.content,
      "source": source,
    }),
  ))
}
