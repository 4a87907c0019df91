/* src/server/core/rust/src/shapes/verses.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, Slots, merge_list, merge_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
  pub text: String,
  pub meaning: String,
}

/// Devotional text page: title, introduction and the verses themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersesContent {
  pub title: String,
  pub intro: String,
  pub verses: Vec<Verse>,
}

impl Normalize for Verse {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      text: merge_text(remote.get("text"), &default.text),
      meaning: merge_text(remote.get("meaning"), &default.meaning),
    }
  }
}

impl Normalize for VersesContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      title: merge_text(remote.get("title"), &default.title),
      intro: merge_text(remote.get("intro"), &default.intro),
      verses: merge_list(remote.get("verses"), &default.verses, Slots::Remote),
    }
  }
}

fn verse(text: &str, meaning: &str) -> Verse {
  Verse { text: text.to_string(), meaning: meaning.to_string() }
}

// The verse text itself is Awadhi in both tables; only the framing is translated.
const DOHA: &str = "निश्चय प्रेम प्रतीति ते, बिनय करैं सनमान।\n\
                    तेहि के कारज सकल शुभ, सिद्ध करैं हनुमान॥";
const CHAUPAI: &str = "जय हनुमंत संत हितकारी। सुन लीजै प्रभु अरज हमारी॥\n\
                       जन के काज बिलंब न कीजै। आतुर दौरि महा सुख दीजै॥";

static EN: LazyLock<VersesContent> = LazyLock::new(|| VersesContent {
  title: "Bajrang Baan".to_string(),
  intro: "Recited with faith, the Bajrang Baan calls on Hanuman to remove every hardship."
    .to_string(),
  verses: vec![
    verse(
      DOHA,
      "Whoever prays with firm love, faith and humility, Hanuman fulfils all their good works.",
    ),
    verse(
      CHAUPAI,
      "Glory to Hanuman, friend of the saints: hear our plea and hasten to grant joy to your devotees.",
    ),
  ],
});

static HI: LazyLock<VersesContent> = LazyLock::new(|| VersesContent {
  title: "बजरंग बाण".to_string(),
  intro: "श्रद्धा से पढ़ा गया बजरंग बाण हनुमान जी से हर संकट दूर करने की प्रार्थना है।".to_string(),
  verses: vec![
    verse(DOHA, "जो दृढ़ प्रेम, विश्वास और विनय से प्रार्थना करता है, हनुमान जी उसके सब शुभ कार्य सिद्ध करते हैं।"),
    verse(CHAUPAI, "संतों के हितकारी हनुमान जी की जय हो, हमारी विनती सुनकर शीघ्र भक्तों को सुख दें।"),
  ],
});

impl ContentShape for VersesContent {
  const KIND: ShapeKind = ShapeKind::Verses;

  fn defaults(locale: Locale) -> &'static Self {
    match locale {
      Locale::En => &EN,
      Locale::Hi => &HI,
    }
  }
}
