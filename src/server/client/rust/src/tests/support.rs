/* src/server/client/rust/src/tests/support.rs */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use serde_json::{Value, json};

use crate::{ClientConfig, ContentClient};

/// Authorization headers observed by the fake backend, one entry per write.
#[derive(Clone, Default)]
pub(super) struct Seen {
  pub auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl Seen {
  pub fn auth(&self) -> Vec<Option<String>> {
    self.auth.lock().unwrap().clone()
  }

  fn record(&self, headers: &HeaderMap) {
    let value = headers.get(header::AUTHORIZATION).map(|v| v.to_str().unwrap().to_string());
    self.auth.lock().unwrap().push(value);
  }
}

pub(super) async fn spawn(router: Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{addr}")
}

/// Address nothing listens on: connections are refused.
pub(super) async fn dead_url() -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);
  format!("http://{addr}")
}

pub(super) fn client(base_url: &str) -> ContentClient {
  ContentClient::new(ClientConfig::new(base_url).with_timeout(Duration::from_millis(300))).unwrap()
}

pub(super) async fn backend(seen: Seen) -> String {
  let router = Router::new()
    .route("/page-content/{locale}/{page}/{component}", get(read_component).patch(patch_component))
    .route("/page-content/{locale}/{page}", get(read_page).put(put_page))
    .with_state(seen);
  spawn(router).await
}

async fn read_component(Path((locale, _page, component)): Path<(String, String, String)>) -> Response {
  match component.as_str() {
    "hero" => Json(json!({
      "id": 1,
      "name": "Hero",
      "description": "",
      "content": { "slides": [{ "text": "X", "imageUrl": "/a.png" }], "cta": "Go" }
    }))
    .into_response(),
    "by-locale" => {
      // Hindi answers late so a quick switch back to English overtakes it.
      if locale == "hi" {
        tokio::time::sleep(Duration::from_millis(150)).await;
      }
      Json(json!({ "name": "Text", "content": { "title": format!("title-{locale}") } }))
        .into_response()
    }
    "broken" => {
      (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "database down" }))).into_response()
    }
    "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
    "slow" => {
      tokio::time::sleep(Duration::from_secs(2)).await;
      Json(json!({ "content": { "cta": "too late" } })).into_response()
    }
    _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "Content not found" }))).into_response(),
  }
}

async fn patch_component(
  State(seen): State<Seen>,
  Path((_locale, _page, component)): Path<(String, String, String)>,
  headers: HeaderMap,
  Json(body): Json<Value>,
) -> Response {
  seen.record(&headers);
  if body.get("invalid").is_some() {
    return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": "title is required" })))
      .into_response();
  }
  Json(json!({
    "id": "c1",
    "name": component,
    "description": body.get("description").cloned().unwrap_or(json!("")),
    "content": body.get("content").cloned().unwrap_or(json!({}))
  }))
  .into_response()
}

async fn read_page(Path((locale, page)): Path<(String, String)>) -> Response {
  if page != "home" {
    return (StatusCode::NOT_FOUND, Json(json!({ "error": "Page not found" }))).into_response();
  }
  Json(json!({
    "pageId": "home",
    "locale": locale,
    "name": "Home",
    "path": "/",
    "description": "",
    "components": [{ "componentId": "hero", "name": "Hero", "content": { "cta": "Go" } }]
  }))
  .into_response()
}

async fn put_page(
  State(seen): State<Seen>,
  Path((locale, page)): Path<(String, String)>,
  headers: HeaderMap,
  Json(body): Json<Value>,
) -> Response {
  seen.record(&headers);
  Json(json!({
    "pageId": page,
    "locale": locale,
    "name": body.get("name").cloned().unwrap_or(json!("")),
    "path": "/",
    "components": body.get("components").cloned().unwrap_or(json!([]))
  }))
  .into_response()
}
