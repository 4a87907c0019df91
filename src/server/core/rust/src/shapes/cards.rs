/* src/server/core/rust/src/shapes/cards.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, Slots, merge_list, merge_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  pub title: String,
  pub description: String,
  pub image_url: String,
  pub link: String,
}

/// Section of linked cards, e.g. the sacred teachings grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsContent {
  pub title: String,
  pub subtitle: String,
  pub cards: Vec<Card>,
}

impl Normalize for Card {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      title: merge_text(remote.get("title"), &default.title),
      description: merge_text(remote.get("description"), &default.description),
      image_url: merge_text(remote.get("imageUrl"), &default.image_url),
      link: merge_text(remote.get("link"), &default.link),
    }
  }
}

impl Normalize for CardsContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      title: merge_text(remote.get("title"), &default.title),
      subtitle: merge_text(remote.get("subtitle"), &default.subtitle),
      cards: merge_list(remote.get("cards"), &default.cards, Slots::Remote),
    }
  }
}

fn card(title: &str, description: &str, image_url: &str, link: &str) -> Card {
  Card {
    title: title.to_string(),
    description: description.to_string(),
    image_url: image_url.to_string(),
    link: link.to_string(),
  }
}

static EN: LazyLock<CardsContent> = LazyLock::new(|| CardsContent {
  title: "Sacred Teachings".to_string(),
  subtitle: "Timeless wisdom for everyday life".to_string(),
  cards: vec![
    card(
      "Hanuman Chalisa",
      "Forty verses in praise of Lord Hanuman, recited for strength and courage.",
      "/images/teachings/chalisa.jpg",
      "/hanuman-chalisa",
    ),
    card(
      "Bajrang Baan",
      "A powerful prayer invoking Hanuman's protection from every obstacle.",
      "/images/teachings/bajrang-baan.jpg",
      "/bajrang-baan",
    ),
    card(
      "Sundarkand",
      "The chapter of the Ramayana celebrating Hanuman's journey to Lanka.",
      "/images/teachings/sundarkand.jpg",
      "/sundarkand",
    ),
  ],
});

static HI: LazyLock<CardsContent> = LazyLock::new(|| CardsContent {
  title: "पावन शिक्षाएं".to_string(),
  subtitle: "दैनिक जीवन के लिए शाश्वत ज्ञान".to_string(),
  cards: vec![
    card(
      "हनुमान चालीसा",
      "भगवान हनुमान की स्तुति में चालीस चौपाइयां, बल और साहस के लिए पाठ की जाती हैं।",
      "/images/teachings/chalisa.jpg",
      "/hanuman-chalisa",
    ),
    card(
      "बजरंग बाण",
      "हर बाधा से रक्षा के लिए हनुमान जी का आह्वान करने वाली शक्तिशाली प्रार्थना।",
      "/images/teachings/bajrang-baan.jpg",
      "/bajrang-baan",
    ),
    card(
      "सुंदरकांड",
      "रामायण का वह अध्याय जिसमें हनुमान जी की लंका यात्रा का वर्णन है।",
      "/images/teachings/sundarkand.jpg",
      "/sundarkand",
    ),
  ],
});

impl ContentShape for CardsContent {
  const KIND: ShapeKind = ShapeKind::Cards;

  fn defaults(locale: Locale) -> &'static Self {
    match locale {
      Locale::En => &EN,
      Locale::Hi => &HI,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn remote_cards_keep_their_count() {
    let remote = json!({ "cards": [{ "title": "Only one" }] });
    let merged = CardsContent::merge(remote.as_object(), Locale::En);
    assert_eq!(merged.cards.len(), 1);
    assert_eq!(merged.cards[0].title, "Only one");
    assert_eq!(merged.cards[0].link, "/hanuman-chalisa");
    assert_eq!(merged.title, "Sacred Teachings");
  }

  #[test]
  fn empty_cards_use_defaults() {
    let remote = json!({ "title": "Teachings", "cards": [] });
    let merged = CardsContent::merge(remote.as_object(), Locale::Hi);
    assert_eq!(merged.title, "Teachings");
    assert_eq!(merged.cards, CardsContent::defaults(Locale::Hi).cards);
  }
}
