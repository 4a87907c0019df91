/* src/server/core/rust/src/shapes/quotes.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, Slots, merge_list, merge_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
  pub text: String,
  pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotesContent {
  pub heading: String,
  pub quotes: Vec<Quote>,
}

impl Normalize for Quote {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      text: merge_text(remote.get("text"), &default.text),
      author: merge_text(remote.get("author"), &default.author),
    }
  }
}

impl Normalize for QuotesContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      heading: merge_text(remote.get("heading"), &default.heading),
      quotes: merge_list(remote.get("quotes"), &default.quotes, Slots::Remote),
    }
  }
}

fn quote(text: &str, author: &str) -> Quote {
  Quote { text: text.to_string(), author: author.to_string() }
}

static EN: LazyLock<QuotesContent> = LazyLock::new(|| QuotesContent {
  heading: "Words of Wisdom".to_string(),
  quotes: vec![
    quote("Where there is devotion, there is no fear.", "Guru Maharaj"),
    quote("Serve all beings, for the Divine dwells in every heart.", "Guru Maharaj"),
    quote("Chant the holy name and the mind becomes still.", "Sant Tulsidas"),
  ],
});

static HI: LazyLock<QuotesContent> = LazyLock::new(|| QuotesContent {
  heading: "ज्ञान के वचन".to_string(),
  quotes: vec![
    quote("जहां भक्ति है, वहां भय नहीं है।", "गुरु महाराज"),
    quote("सभी प्राणियों की सेवा करो, क्योंकि हर हृदय में ईश्वर का वास है।", "गुरु महाराज"),
    quote("प्रभु का नाम जपो, मन स्वयं शांत हो जाएगा।", "संत तुलसीदास"),
  ],
});

impl ContentShape for QuotesContent {
  const KIND: ShapeKind = ShapeKind::Quotes;

  fn defaults(locale: Locale) -> &'static Self {
    match locale {
      Locale::En => &EN,
      Locale::Hi => &HI,
    }
  }
}
