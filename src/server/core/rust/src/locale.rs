/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// Cookie consulted by the request-level chain when no explicit signal is given.
pub const DEFAULT_LOCALE_COOKIE: &str = "locale";

/// The two language variants every piece of page content exists in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Hi,
}

impl Locale {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Hi => "hi",
    }
  }

  pub fn all() -> [Locale; 2] {
    [Self::En, Self::Hi]
  }

  /// URL-boundary coercion: only the exact tag `hi` selects Hindi,
  /// any other path segment (`fr`, `EN`, garbage) is served as English.
  pub fn coerce(segment: &str) -> Self {
    if segment == "hi" { Self::Hi } else { Self::En }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Locale {
  type Err = ContentError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Self::En),
      "hi" => Ok(Self::Hi),
      other => Err(ContentError::validation(format!("unsupported locale \"{other}\""))),
    }
  }
}

/// Map an arbitrary language signal (i18n runtime tag, cookie value, header
/// entry) onto a supported locale. Never fails: anything not starting with
/// `hi` is English.
pub fn resolve_locale(signal: Option<&str>) -> Locale {
  match signal {
    Some(s) if s.starts_with("hi") => Locale::Hi,
    _ => Locale::En,
  }
}

/// Raw request inputs for the request-level locale chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolveData<'a> {
  /// Explicit signal from the route or a `?lang=` query.
  pub explicit: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub cookie_name: &'a str,
}

/// Request chain: explicit signal -> locale cookie -> Accept-Language -> en
pub fn resolve_request_locale(data: &ResolveData<'_>) -> Locale {
  if let Some(explicit) = data.explicit.filter(|s| !s.is_empty()) {
    return resolve_locale(Some(explicit));
  }

  if let Some(value) = data.cookie_header.and_then(|h| cookie_value(h, data.cookie_name)) {
    return resolve_locale(Some(value));
  }

  if let Some(lang) = data.accept_language.and_then(preferred_language) {
    return resolve_locale(Some(lang));
  }

  Locale::En
}

/// Look up a single cookie in a raw `Cookie` header. Empty values count as absent.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  header.split(';').find_map(|pair| {
    let (k, v) = pair.trim().split_once('=')?;
    let v = v.trim();
    (k.trim() == name && !v.is_empty()).then_some(v)
  })
}

/// Highest-q language tag of an `Accept-Language` header. Ties keep header order.
fn preferred_language(header: &str) -> Option<&str> {
  let mut best: Option<(&str, f64)> = None;
  for part in header.split(',') {
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    if lang.is_empty() {
      continue;
    }
    let q = segments
      .filter_map(|s| s.trim().strip_prefix("q="))
      .find_map(|v| v.parse::<f64>().ok())
      .unwrap_or(1.0);
    if best.is_none_or(|(_, bq)| q > bq) {
      best = Some((lang, q));
    }
  }
  best.map(|(lang, _)| lang)
}
