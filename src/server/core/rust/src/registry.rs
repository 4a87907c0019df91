/* src/server/core/rust/src/registry.rs */

use crate::envelope::{ContentEnvelope, PageComponent, PageEnvelope};
use crate::key::{ContentKey, PageKey};
use crate::shapes::ShapeKind;

/// A component the site knows how to render without the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
  pub page_id: &'static str,
  pub component_id: &'static str,
  pub kind: ShapeKind,
  pub name: &'static str,
  pub description: &'static str,
}

/// Page metadata used when a whole page has to be assembled from defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
  pub page_id: &'static str,
  pub name: &'static str,
  pub path: &'static str,
}

const PAGES: &[PageMeta] = &[
  PageMeta { page_id: "home", name: "Home", path: "/" },
  PageMeta { page_id: "donation", name: "Donation", path: "/donation" },
  PageMeta { page_id: "bajrang-baan", name: "Bajrang Baan", path: "/bajrang-baan" },
];

const ENTRIES: &[RegistryEntry] = &[
  RegistryEntry {
    page_id: "home",
    component_id: "hero",
    kind: ShapeKind::Hero,
    name: "Hero",
    description: "Carousel of temple images with captions and call to action",
  },
  RegistryEntry {
    page_id: "home",
    component_id: "sacred-teachings",
    kind: ShapeKind::Cards,
    name: "Sacred Teachings",
    description: "Cards linking to devotional texts",
  },
  RegistryEntry {
    page_id: "home",
    component_id: "words-of-wisdom",
    kind: ShapeKind::Quotes,
    name: "Words of Wisdom",
    description: "Rotating quotes",
  },
  RegistryEntry {
    page_id: "home",
    component_id: "upcoming-events",
    kind: ShapeKind::Events,
    name: "Upcoming Events",
    description: "Festival and satsang calendar",
  },
  RegistryEntry {
    page_id: "donation",
    component_id: "intro",
    kind: ShapeKind::Text,
    name: "Donation Intro",
    description: "Heading and appeal shown above the donation form",
  },
  RegistryEntry {
    page_id: "bajrang-baan",
    component_id: "content",
    kind: ShapeKind::Verses,
    name: "Bajrang Baan",
    description: "Prayer text with translated meanings",
  },
];

pub fn entries() -> &'static [RegistryEntry] {
  ENTRIES
}

pub fn lookup(page_id: &str, component_id: &str) -> Option<&'static RegistryEntry> {
  ENTRIES.iter().find(|e| e.page_id == page_id && e.component_id == component_id)
}

pub fn page_meta(page_id: &str) -> Option<&'static PageMeta> {
  PAGES.iter().find(|p| p.page_id == page_id)
}

impl RegistryEntry {
  /// Built-in default envelope for this component in `key`'s locale.
  pub fn default_envelope(&self, key: &ContentKey) -> ContentEnvelope {
    ContentEnvelope {
      id: serde_json::Value::String(format!("{}:{}", self.page_id, self.component_id)),
      name: self.name.to_string(),
      description: self.description.to_string(),
      content: self.kind.default_content(key.locale),
    }
  }
}

/// Built-in default envelope for a key, if the component is registered.
pub fn default_envelope(key: &ContentKey) -> Option<ContentEnvelope> {
  lookup(&key.page_id, &key.component_id).map(|entry| entry.default_envelope(key))
}

/// Assemble a page from the defaults of every registered component.
pub fn default_page(key: &PageKey) -> Option<PageEnvelope> {
  let meta = page_meta(&key.page_id)?;
  let components = ENTRIES
    .iter()
    .filter(|e| e.page_id == meta.page_id)
    .filter_map(|entry| {
      let ckey = key.component(entry.component_id).ok()?;
      Some(PageComponent {
        component_id: entry.component_id.to_string(),
        envelope: entry.default_envelope(&ckey),
      })
    })
    .collect();

  Some(PageEnvelope {
    page_id: meta.page_id.to_string(),
    locale: key.locale,
    name: meta.name.to_string(),
    path: meta.path.to_string(),
    description: String::new(),
    components,
  })
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;
  use crate::locale::Locale;

  #[test]
  fn entries_are_unique_and_have_pages() {
    let mut seen = HashSet::new();
    for e in entries() {
      assert!(seen.insert((e.page_id, e.component_id)), "duplicate {}/{}", e.page_id, e.component_id);
      assert!(page_meta(e.page_id).is_some(), "no page meta for {}", e.page_id);
    }
  }

  #[test]
  fn lookup_hero() {
    let entry = lookup("home", "hero").unwrap();
    assert_eq!(entry.kind, ShapeKind::Hero);
    assert!(lookup("home", "footer").is_none());
  }

  #[test]
  fn default_envelope_carries_locale_content() {
    let key = ContentKey::new(Locale::En, "home", "hero").unwrap();
    let env = default_envelope(&key).unwrap();
    assert_eq!(env.name, "Hero");
    assert_eq!(env.content["cta"], "Explore Now");
    assert_eq!(env.id, serde_json::json!("home:hero"));

    let key = key.with_locale(Locale::Hi);
    assert_eq!(default_envelope(&key).unwrap().content["cta"], "अभी देखें");
  }

  #[test]
  fn unknown_component_has_no_default() {
    let key = ContentKey::new(Locale::En, "products", "grid").unwrap();
    assert!(default_envelope(&key).is_none());
  }

  #[test]
  fn default_page_lists_registered_components() {
    let page = default_page(&PageKey::new(Locale::Hi, "home").unwrap()).unwrap();
    assert_eq!(page.locale, Locale::Hi);
    assert_eq!(page.path, "/");
    let ids: Vec<_> = page.components.iter().map(|c| c.component_id.as_str()).collect();
    assert_eq!(ids, ["hero", "sacred-teachings", "words-of-wisdom", "upcoming-events"]);
    assert!(default_page(&PageKey::new(Locale::En, "nowhere").unwrap()).is_none());
  }
}
