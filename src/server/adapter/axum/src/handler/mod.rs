/* src/server/adapter/axum/src/handler/mod.rs */

mod read;
mod resolved;
mod write;

use std::sync::Arc;

use axum::Router;
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use vani_client::{ContentClient, ContentResolver};
use vani_content::locale::DEFAULT_LOCALE_COOKIE;
use vani_content::{
  DATA_SOURCE_HEADER, DataSource, FallbackStore, Locale, ResolveData, TokenVerifier,
  resolve_request_locale,
};

pub(crate) struct AppState {
  pub resolver: ContentResolver,
  pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
  pub fn client(&self) -> &ContentClient {
    self.resolver.client()
  }

  pub fn fallback(&self) -> Option<&FallbackStore> {
    self.resolver.fallback()
  }
}

pub(crate) fn build_router(
  client: ContentClient,
  fallback: Option<Arc<FallbackStore>>,
  verifier: Arc<dyn TokenVerifier>,
) -> Router {
  let resolver = match fallback {
    Some(store) => ContentResolver::new(client).with_fallback(store),
    None => ContentResolver::new(client),
  };
  let state = Arc::new(AppState { resolver, verifier });

  Router::new()
    .route(
      "/api/page-content/{locale}/{page_id}/{component_id}",
      get(read::handle_component).patch(write::handle_patch),
    )
    .route("/api/page-content/{locale}/{page_id}", get(read::handle_page).put(write::handle_put))
    .route("/api/resolved/{locale}/{page_id}/{component_id}", get(resolved::handle_resolved))
    .route("/api/locale", get(handle_locale))
    .route("/api/health", get(handle_health))
    .layer(axum::middleware::map_response(no_store))
    .with_state(state)
}

async fn no_store(mut response: Response) -> Response {
  response.headers_mut().insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
  response
}

/// 200 JSON body tagged with where the data came from.
pub(super) fn tagged(source: DataSource, body: impl Serialize) -> Response {
  (StatusCode::OK, [(DATA_SOURCE_HEADER, source.as_str())], axum::Json(body)).into_response()
}

pub(super) fn header<'a>(headers: &'a HeaderMap, name: axum::http::HeaderName) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

async fn handle_health() -> impl IntoResponse {
  axum::Json(serde_json::json!({ "status": "ok" }))
}

#[derive(serde::Deserialize)]
struct LocaleQuery {
  lang: Option<String>,
}

/// Locale a page render would use: `?lang=`, then cookie, then `Accept-Language`.
async fn handle_locale(
  axum::extract::Query(query): axum::extract::Query<LocaleQuery>,
  headers: HeaderMap,
) -> impl IntoResponse {
  let data = ResolveData {
    explicit: query.lang.as_deref(),
    cookie_header: header(&headers, axum::http::header::COOKIE),
    accept_language: header(&headers, axum::http::header::ACCEPT_LANGUAGE),
    cookie_name: DEFAULT_LOCALE_COOKIE,
  };
  let locale = resolve_request_locale(&data);
  axum::Json(serde_json::json!({ "locale": locale, "supported": Locale::all() }))
}
