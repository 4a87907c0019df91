/* src/server/core/rust/src/shapes/mod.rs */

//! Typed content shapes. Each shape pairs a per-locale default table with a
//! normalizer, replacing the per-component field checks the wire format
//! would otherwise require.

mod cards;
mod events;
mod hero;
mod quotes;
mod text;
mod verses;

use serde::Serialize;

use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::Normalize;

pub use cards::{Card, CardsContent};
pub use events::{Event, EventsContent};
pub use hero::{HERO_SLIDE_SLOTS, HeroContent, ImageRef, Slide};
pub use quotes::{Quote, QuotesContent};
pub use text::TextContent;
pub use verses::{Verse, VersesContent};

/// A render-safe content type with a compile-time default table per locale.
pub trait ContentShape: Normalize + Serialize + Send + Sync + 'static {
  const KIND: ShapeKind;

  /// Immutable default content, shared by reference.
  fn defaults(locale: Locale) -> &'static Self;

  /// Merge (possibly absent, possibly partial) remote content over the
  /// locale defaults. Total: the result has every field populated.
  fn merge(content: Option<&ContentMap>, locale: Locale) -> Self {
    let defaults = Self::defaults(locale);
    match content {
      Some(map) => Self::normalize(map, defaults),
      None => defaults.clone(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
  Hero,
  Cards,
  Quotes,
  Events,
  Text,
  Verses,
}

impl ShapeKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Hero => "hero",
      Self::Cards => "cards",
      Self::Quotes => "quotes",
      Self::Events => "events",
      Self::Text => "text",
      Self::Verses => "verses",
    }
  }

  /// Untyped counterpart of [`ContentShape::merge`] for callers that only
  /// know the shape at runtime (proxy, CLI).
  pub fn resolve_json(self, content: Option<&ContentMap>, locale: Locale) -> serde_json::Value {
    match self {
      Self::Hero => to_json(&HeroContent::merge(content, locale)),
      Self::Cards => to_json(&CardsContent::merge(content, locale)),
      Self::Quotes => to_json(&QuotesContent::merge(content, locale)),
      Self::Events => to_json(&EventsContent::merge(content, locale)),
      Self::Text => to_json(&TextContent::merge(content, locale)),
      Self::Verses => to_json(&VersesContent::merge(content, locale)),
    }
  }

  pub fn default_content(self, locale: Locale) -> ContentMap {
    match self.resolve_json(None, locale) {
      serde_json::Value::Object(map) => map,
      _ => ContentMap::new(),
    }
  }
}

fn to_json<S: Serialize>(value: &S) -> serde_json::Value {
  serde_json::to_value(value).unwrap_or_default()
}
