/* src/cli/core/src/pull.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use vani_content::{FallbackStore, FetchOutcome, PageEnvelope, PageKey};

use crate::config::VaniConfig;
use crate::get::client;
use crate::ui;

pub async fn run_pull(config: &VaniConfig, key: &PageKey, out: &Path) -> Result<()> {
  let client = client(config)?;
  let url = client.page_url(key)?;
  ui::arrow(url.as_str());

  let page = match client.fetch_page(key).await {
    FetchOutcome::Fetched(page) => page,
    FetchOutcome::Rejected { status, message } => bail!("backend returned {status}: {message}"),
    FetchOutcome::Unavailable { reason } => bail!("failed to fetch {url}: {reason}"),
  };

  let count = page.components.len();
  let total = merge_into(out, key, page)?;
  ui::ok(&format!("{key}: {count} components"));
  ui::ok(&format!("saved {} ({total} pages)", out.display()));
  Ok(())
}

/// Upsert `page` into the fallback file at `out`, creating it if needed.
fn merge_into(out: &Path, key: &PageKey, mut page: PageEnvelope) -> Result<usize> {
  let mut store = FallbackStore::load_or_empty(out)
    .with_context(|| format!("failed to load existing {}", out.display()))?;
  // Keyed by the request, whatever the backend echoed.
  page.locale = key.locale;
  page.page_id.clone_from(&key.page_id);
  store.upsert_page(page);
  store.save(out).with_context(|| format!("failed to write {}", out.display()))?;
  Ok(store.len())
}

#[cfg(test)]
mod tests {
  use vani_content::{ContentEnvelope, ContentKey, Locale};

  use super::*;

  #[test]
  fn pull_merges_pages() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fallback.json");
    let en = PageKey::new(Locale::En, "home").unwrap();
    let hi = PageKey::new(Locale::Hi, "home").unwrap();

    let mut page = PageEnvelope { page_id: "home".into(), ..Default::default() };
    let content = serde_json::json!({ "cta": "Go" }).as_object().cloned().unwrap();
    page.upsert("hero", ContentEnvelope::with_content("Hero", content));

    assert_eq!(merge_into(&out, &en, page.clone()).unwrap(), 1);
    assert_eq!(merge_into(&out, &hi, page.clone()).unwrap(), 2);
    assert_eq!(merge_into(&out, &en, page).unwrap(), 2);

    let store = FallbackStore::load(&out).unwrap();
    let key = ContentKey::new(Locale::Hi, "home", "hero").unwrap();
    assert_eq!(store.component(&key).unwrap().content["cta"], "Go");
  }
}
