/* src/server/core/rust/src/shapes/text.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, merge_text};

/// Plain text section: heading, subheading and a body paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
  pub title: String,
  pub subtitle: String,
  pub body: String,
}

impl Normalize for TextContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      title: merge_text(remote.get("title"), &default.title),
      subtitle: merge_text(remote.get("subtitle"), &default.subtitle),
      body: merge_text(remote.get("body"), &default.body),
    }
  }
}

static EN: LazyLock<TextContent> = LazyLock::new(|| TextContent {
  title: "Support the Ashram".to_string(),
  subtitle: "Every offering sustains seva".to_string(),
  body: "Your donation keeps the temple lamps lit, feeds pilgrims at the daily bhandara and \
         supports the ashram's charitable work."
    .to_string(),
});

static HI: LazyLock<TextContent> = LazyLock::new(|| TextContent {
  title: "आश्रम को सहयोग दें".to_string(),
  subtitle: "हर भेंट से सेवा चलती है".to_string(),
  body: "आपका दान मंदिर के दीपक जलाए रखता है, दैनिक भंडारे में श्रद्धालुओं को भोजन कराता है \
         और आश्रम के सेवा कार्यों में सहायता करता है।"
    .to_string(),
});

impl ContentShape for TextContent {
  const KIND: ShapeKind = ShapeKind::Text;

  fn defaults(locale: Locale) -> &'static Self {
    match locale {
      Locale::En => &EN,
      Locale::Hi => &HI,
    }
  }
}
