/* src/server/client/rust/src/resolver.rs */

use std::sync::Arc;

use vani_content::{
  ContentKey, ContentShape, FallbackStore, Resolution, ShapeKind, resolve_component, resolve_kind,
};

use crate::client::ContentClient;

/// Fetch, fall back and merge in one call: the whole read protocol for a component.
#[derive(Debug, Clone)]
pub struct ContentResolver {
  client: ContentClient,
  fallback: Option<Arc<FallbackStore>>,
}

impl ContentResolver {
  pub fn new(client: ContentClient) -> Self {
    Self { client, fallback: None }
  }

  /// Secondary table consulted on soft failures.
  pub fn with_fallback(mut self, store: Arc<FallbackStore>) -> Self {
    self.fallback = Some(store);
    self
  }

  pub fn client(&self) -> &ContentClient {
    &self.client
  }

  pub fn fallback(&self) -> Option<&FallbackStore> {
    self.fallback.as_deref()
  }

  pub async fn resolve<S: ContentShape>(&self, key: &ContentKey) -> Resolution<S> {
    let outcome = self.client.fetch_component(key).await;
    resolve_component(&outcome, key, self.fallback())
  }

  pub async fn resolve_kind(
    &self,
    kind: ShapeKind,
    key: &ContentKey,
  ) -> Resolution<serde_json::Value> {
    let outcome = self.client.fetch_component(key).await;
    resolve_kind(kind, &outcome, key, self.fallback())
  }
}
