/* src/server/core/rust/src/resolve.rs */

use serde::Serialize;

use crate::envelope::{ContentEnvelope, ContentMap};
use crate::fallback::FallbackStore;
use crate::key::ContentKey;
use crate::shapes::{ContentShape, ShapeKind};

/// Response header telling callers whether they got a live or degraded answer.
pub const DATA_SOURCE_HEADER: &str = "x-data-source";

/// Classified result of a single attempt to read from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T = ContentEnvelope> {
  /// 2xx with a parseable body.
  Fetched(T),
  /// Soft failure: the backend answered with a non-2xx status.
  Rejected { status: u16, message: String },
  /// Hard failure: network error, timeout, or unparseable body.
  Unavailable { reason: String },
}

impl<T> FetchOutcome<T> {
  pub fn is_fetched(&self) -> bool {
    matches!(self, Self::Fetched(_))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
  Api,
  Fallback,
}

impl DataSource {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Api => "api",
      Self::Fallback => "fallback",
    }
  }
}

/// Render-safe content plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<S> {
  pub content: S,
  pub source: DataSource,
}

/// Pick the content map to merge over the defaults.
/// Soft failures consult the secondary table first; hard failures go straight to defaults.
fn select<'a>(
  outcome: &'a FetchOutcome,
  key: &ContentKey,
  fallback: Option<&'a FallbackStore>,
) -> (Option<&'a ContentMap>, DataSource) {
  match outcome {
    FetchOutcome::Fetched(envelope) => (Some(&envelope.content), DataSource::Api),
    FetchOutcome::Rejected { status, message } => {
      let secondary = fallback.and_then(|store| store.component(key));
      tracing::warn!(
        key = %key,
        status,
        message = %message,
        secondary = secondary.is_some(),
        "backend rejected content read, using fallback"
      );
      (secondary.map(|env| &env.content), DataSource::Fallback)
    }
    FetchOutcome::Unavailable { reason } => {
      tracing::warn!(key = %key, reason = %reason, "backend unavailable, using defaults");
      (None, DataSource::Fallback)
    }
  }
}

/// Turn a fetch outcome into typed content. Never fails.
pub fn resolve_component<S: ContentShape>(
  outcome: &FetchOutcome,
  key: &ContentKey,
  fallback: Option<&FallbackStore>,
) -> Resolution<S> {
  let (content, source) = select(outcome, key, fallback);
  Resolution { content: S::merge(content, key.locale), source }
}

/// Runtime-shaped counterpart of [`resolve_component`].
pub fn resolve_kind(
  kind: ShapeKind,
  outcome: &FetchOutcome,
  key: &ContentKey,
  fallback: Option<&FallbackStore>,
) -> Resolution<serde_json::Value> {
  let (content, source) = select(outcome, key, fallback);
  Resolution { content: kind.resolve_json(content, key.locale), source }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::envelope::PageEnvelope;
  use crate::locale::Locale;
  use crate::shapes::{HeroContent, QuotesContent};

  fn hero_key(locale: Locale) -> ContentKey {
    ContentKey::new(locale, "home", "hero").unwrap()
  }

  fn envelope(content: serde_json::Value) -> ContentEnvelope {
    ContentEnvelope::with_content("Hero", content.as_object().cloned().unwrap_or_default())
  }

  fn store_with_cta(cta: &str) -> FallbackStore {
    let mut page = PageEnvelope { page_id: "home".into(), locale: Locale::En, ..Default::default() };
    page.upsert("hero", envelope(json!({ "cta": cta })));
    FallbackStore::from_pages([page])
  }

  #[test]
  fn fetched_content_is_merged_and_tagged_api() {
    let outcome = FetchOutcome::Fetched(envelope(json!({
      "slides": [{ "text": "X", "imageUrl": "/a.png" }],
      "cta": "Go"
    })));
    let res: Resolution<HeroContent> = resolve_component(&outcome, &hero_key(Locale::En), None);
    assert_eq!(res.source, DataSource::Api);
    assert_eq!(res.content.slides.len(), 5);
    assert_eq!(res.content.slides[0].text, "X");
    assert_eq!(res.content.slides[0].image_url, "/a.png");
    assert_eq!(res.content.cta, "Go");
  }

  #[test]
  fn hard_failure_is_exact_default() {
    let outcome = FetchOutcome::Unavailable { reason: "timed out".into() };
    let store = store_with_cta("Visit");
    for locale in Locale::all() {
      let res: Resolution<HeroContent> =
        resolve_component(&outcome, &hero_key(locale), Some(&store));
      assert_eq!(res.source, DataSource::Fallback);
      assert_eq!(res.content, *HeroContent::defaults(locale));
    }
  }

  #[test]
  fn soft_failure_prefers_secondary_table() {
    let outcome = FetchOutcome::Rejected { status: 500, message: "boom".into() };
    let store = store_with_cta("Visit");
    let res: Resolution<HeroContent> =
      resolve_component(&outcome, &hero_key(Locale::En), Some(&store));
    assert_eq!(res.source, DataSource::Fallback);
    assert_eq!(res.content.cta, "Visit");
    assert_eq!(res.content.slides, HeroContent::defaults(Locale::En).slides);
  }

  #[test]
  fn soft_failure_without_secondary_entry_is_default() {
    let outcome = FetchOutcome::Rejected { status: 404, message: "missing".into() };
    let store = store_with_cta("Visit");
    let res: Resolution<HeroContent> =
      resolve_component(&outcome, &hero_key(Locale::Hi), Some(&store));
    assert_eq!(res.content, *HeroContent::defaults(Locale::Hi));
  }

  #[test]
  fn resolving_twice_is_identical() {
    let outcome = FetchOutcome::Fetched(envelope(json!({ "quotes": [{ "text": "Q" }] })));
    let key = ContentKey::new(Locale::En, "home", "words-of-wisdom").unwrap();
    let first: Resolution<QuotesContent> = resolve_component(&outcome, &key, None);
    let second: Resolution<QuotesContent> = resolve_component(&outcome, &key, None);
    assert_eq!(first, second);
  }

  #[test]
  fn kind_resolution_matches_typed() {
    let outcome = FetchOutcome::Fetched(envelope(json!({ "cta": "Go" })));
    let key = hero_key(Locale::En);
    let typed: Resolution<HeroContent> = resolve_component(&outcome, &key, None);
    let untyped = resolve_kind(ShapeKind::Hero, &outcome, &key, None);
    assert_eq!(untyped.content, serde_json::to_value(&typed.content).unwrap());
    assert_eq!(untyped.source, DataSource::Api);
  }

  #[test]
  fn data_source_strings() {
    assert_eq!(DataSource::Api.as_str(), "api");
    assert_eq!(DataSource::Fallback.as_str(), "fallback");
  }
}
