/* src/server/core/rust/src/envelope.rs */

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub type ContentMap = serde_json::Map<String, serde_json::Value>;

/// Wire object the backend returns for one component.
/// `content` has no shared schema; each shape interprets it on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEnvelope {
  /// Backend id, string or number, carried through untouched.
  #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
  pub id: serde_json::Value,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub content: ContentMap,
}

impl ContentEnvelope {
  pub fn with_content(name: impl Into<String>, content: ContentMap) -> Self {
    Self { name: name.into(), content, ..Self::default() }
  }
}

/// One component inside a page-level response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageComponent {
  pub component_id: String,
  #[serde(flatten)]
  pub envelope: ContentEnvelope,
}

/// Page-level wire object: metadata plus every component of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
  pub page_id: String,
  #[serde(default)]
  pub locale: Locale,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub path: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub components: Vec<PageComponent>,
}

impl PageEnvelope {
  pub fn component(&self, component_id: &str) -> Option<&ContentEnvelope> {
    self.components.iter().find(|c| c.component_id == component_id).map(|c| &c.envelope)
  }

  /// Insert or replace a component, keeping the original order for replacements.
  pub fn upsert(&mut self, component_id: &str, envelope: ContentEnvelope) {
    match self.components.iter_mut().find(|c| c.component_id == component_id) {
      Some(existing) => existing.envelope = envelope,
      None => self
        .components
        .push(PageComponent { component_id: component_id.to_string(), envelope }),
    }
  }
}
