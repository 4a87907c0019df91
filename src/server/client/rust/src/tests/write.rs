/* src/server/client/rust/src/tests/write.rs */

use serde_json::json;
use vani_content::{BACKEND_UNAVAILABLE_MESSAGE, ContentKey, Locale, PageKey};

use super::support::{Seen, backend, client, dead_url};

fn hero() -> ContentKey {
  ContentKey::new(Locale::En, "home", "hero").unwrap()
}

#[tokio::test]
async fn patch_echoes_sent_fields() {
  let seen = Seen::default();
  let base = backend(seen.clone()).await;
  let patch = json!({ "content": { "cta": "Visit", "slides": [{ "text": "New" }] } });

  let updated = client(&base).update_component(&hero(), &patch, Some("secret")).await.unwrap();
  assert_eq!(updated.content["cta"], "Visit");
  assert_eq!(updated.content["slides"], patch["content"]["slides"]);
  assert_eq!(seen.auth(), vec![Some("Bearer secret".to_string())]);
}

#[tokio::test]
async fn patch_without_token_sends_no_header() {
  let seen = Seen::default();
  let base = backend(seen.clone()).await;
  let patch = json!({ "content": { "cta": "Visit" } });

  client(&base).update_component(&hero(), &patch, None).await.unwrap();
  client(&base).update_component(&hero(), &patch, Some("")).await.unwrap();
  assert_eq!(seen.auth(), vec![None, None]);
}

#[tokio::test]
async fn rejected_write_is_surfaced() {
  let base = backend(Seen::default()).await;
  let err =
    client(&base).update_component(&hero(), &json!({ "invalid": true }), None).await.unwrap_err();
  assert_eq!(err.code(), "VALIDATION_ERROR");
  assert_eq!(err.status(), 422);
  assert_eq!(err.message(), "title is required");
}

#[tokio::test]
async fn unreachable_backend_is_reported() {
  let err = client(&dead_url().await)
    .update_component(&hero(), &json!({ "content": {} }), None)
    .await
    .unwrap_err();
  assert_eq!(err.status(), 503);
  assert_eq!(err.message(), BACKEND_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn put_replaces_page() {
  let seen = Seen::default();
  let base = backend(seen.clone()).await;
  let body = json!({
    "name": "Home",
    "components": [{ "componentId": "hero", "name": "Hero", "content": { "cta": "Hi" } }]
  });
  let page = client(&base)
    .replace_page(&PageKey::new(Locale::Hi, "home").unwrap(), &body, Some("t"))
    .await
    .unwrap();
  assert_eq!(page.locale, Locale::Hi);
  assert_eq!(page.component("hero").unwrap().content["cta"], "Hi");
  assert_eq!(seen.auth(), vec![Some("Bearer t".to_string())]);
}

#[tokio::test]
async fn patch_lands_on_its_own_key() {
  let seen = Seen::default();
  let base = backend(seen.clone()).await;
  let patch = json!({ "content": { "cta": "Visit" } });

  for id in ["x/../hero", "hero?x=1"] {
    let key = ContentKey::new(Locale::En, "home", id).unwrap();
    let updated = client(&base).update_component(&key, &patch, Some("secret")).await.unwrap();
    assert_eq!(updated.name, id);
  }
  assert_eq!(seen.auth().len(), 2);
}
