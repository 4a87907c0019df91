/* src/server/core/rust/src/fallback.rs */

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::envelope::{ContentEnvelope, PageEnvelope};
use crate::errors::ContentError;
use crate::key::{ContentKey, PageKey};
use crate::locale::Locale;

#[derive(Default, Serialize, Deserialize)]
struct FallbackFile {
  #[serde(default)]
  pages: Vec<PageEnvelope>,
}

/// Second-level default resource consulted when the backend answers with a
/// non-2xx status. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackStore {
  pages: BTreeMap<(Locale, String), PageEnvelope>,
}

impl FallbackStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_pages(pages: impl IntoIterator<Item = PageEnvelope>) -> Self {
    let mut store = Self::new();
    for page in pages {
      store.upsert_page(page);
    }
    store
  }

  /// Parse the `{"pages": [...]}` document. Later duplicates replace earlier ones.
  pub fn from_json(json: &str) -> Result<Self, ContentError> {
    let file: FallbackFile = serde_json::from_str(json)
      .map_err(|e| ContentError::internal(format!("invalid fallback content: {e}")))?;
    Ok(Self::from_pages(file.pages))
  }

  pub fn load(path: &Path) -> Result<Self, ContentError> {
    let json = std::fs::read_to_string(path)
      .map_err(|e| ContentError::internal(format!("failed to read {}: {e}", path.display())))?;
    let store = Self::from_json(&json)?;
    tracing::info!(path = %path.display(), pages = store.len(), "loaded fallback content");
    Ok(store)
  }

  /// Like [`FallbackStore::load`], but a missing file is an empty store.
  pub fn load_or_empty(path: &Path) -> Result<Self, ContentError> {
    if path.exists() { Self::load(path) } else { Ok(Self::new()) }
  }

  pub fn save(&self, path: &Path) -> Result<(), ContentError> {
    std::fs::write(path, self.to_json_pretty())
      .map_err(|e| ContentError::internal(format!("failed to write {}: {e}", path.display())))
  }

  pub fn to_json_pretty(&self) -> String {
    let file = FallbackFile { pages: self.pages.values().cloned().collect() };
    serde_json::to_string_pretty(&file).unwrap_or_default()
  }

  pub fn upsert_page(&mut self, page: PageEnvelope) {
    self.pages.insert((page.locale, page.page_id.clone()), page);
  }

  pub fn page(&self, key: &PageKey) -> Option<&PageEnvelope> {
    self.pages.get(&(key.locale, key.page_id.clone()))
  }

  pub fn component(&self, key: &ContentKey) -> Option<&ContentEnvelope> {
    self.page(&key.page())?.component(&key.component_id)
  }

  pub fn len(&self) -> usize {
    self.pages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pages.is_empty()
  }
}
