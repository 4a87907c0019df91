/* src/server/core/rust/src/key.rs */

use std::fmt;

use crate::errors::ContentError;
use crate::locale::Locale;

/// First path segment of every page-content endpoint.
pub const API_ROOT: &str = "page-content";

/// Address of one editable content unit. Ids are opaque: any non-empty string
/// except the path-navigation segments `.` and `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
  pub locale: Locale,
  pub page_id: String,
  pub component_id: String,
}

/// Address of a whole page of components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
  pub locale: Locale,
  pub page_id: String,
}

fn require_id(kind: &str, value: &str) -> Result<(), ContentError> {
  if value.trim().is_empty() {
    return Err(ContentError::validation(format!("{kind} must not be empty")));
  }
  if matches!(value, "." | "..") {
    return Err(ContentError::validation(format!("{kind} must not be \"{value}\"")));
  }
  Ok(())
}

impl ContentKey {
  pub fn new(
    locale: Locale,
    page_id: impl Into<String>,
    component_id: impl Into<String>,
  ) -> Result<Self, ContentError> {
    let page_id = page_id.into();
    let component_id = component_id.into();
    require_id("pageId", &page_id)?;
    require_id("componentId", &component_id)?;
    Ok(Self { locale, page_id, component_id })
  }

  /// Same component in another language.
  pub fn with_locale(&self, locale: Locale) -> Self {
    Self { locale, ..self.clone() }
  }

  pub fn page(&self) -> PageKey {
    PageKey { locale: self.locale, page_id: self.page_id.clone() }
  }

  /// Unencoded API path segments: `page-content`, locale, pageId, componentId.
  /// Each must be percent-encoded on its own when placed in a URL.
  pub fn segments(&self) -> [&str; 4] {
    [API_ROOT, self.locale.as_str(), &self.page_id, &self.component_id]
  }
}

impl PageKey {
  pub fn new(locale: Locale, page_id: impl Into<String>) -> Result<Self, ContentError> {
    let page_id = page_id.into();
    require_id("pageId", &page_id)?;
    Ok(Self { locale, page_id })
  }

  pub fn component(&self, component_id: impl Into<String>) -> Result<ContentKey, ContentError> {
    ContentKey::new(self.locale, self.page_id.clone(), component_id)
  }

  pub fn segments(&self) -> [&str; 3] {
    [API_ROOT, self.locale.as_str(), &self.page_id]
  }
}

impl fmt::Display for ContentKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}/{}", self.locale, self.page_id, self.component_id)
  }
}

impl fmt::Display for PageKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.locale, self.page_id)
  }
}
