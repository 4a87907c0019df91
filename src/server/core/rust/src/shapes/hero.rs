/* src/server/core/rust/src/shapes/hero.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, Slots, merge_list, merge_object, merge_text};

/// The hero carousel always renders this many slides.
pub const HERO_SLIDE_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
  pub text: String,
  pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
  pub src: String,
  pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
  pub slides: Vec<Slide>,
  pub cta: String,
  pub background: ImageRef,
}

impl Normalize for Slide {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      text: merge_text(remote.get("text"), &default.text),
      image_url: merge_text(remote.get("imageUrl"), &default.image_url),
    }
  }
}

impl Normalize for ImageRef {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      src: merge_text(remote.get("src"), &default.src),
      alt: merge_text(remote.get("alt"), &default.alt),
    }
  }
}

impl Normalize for HeroContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      slides: merge_list(remote.get("slides"), &default.slides, Slots::Fixed(HERO_SLIDE_SLOTS)),
      cta: merge_text(remote.get("cta"), &default.cta),
      background: merge_object(remote.get("background"), &default.background),
    }
  }
}

const TEMPLE_IMAGES: [&str; HERO_SLIDE_SLOTS] = [
  "/images/temple-1.jpg",
  "/images/temple-2.jpg",
  "/images/temple-3.jpg",
  "/images/temple-4.jpg",
  "/images/temple-5.jpg",
];

fn slides(texts: [&str; HERO_SLIDE_SLOTS]) -> Vec<Slide> {
  texts
    .iter()
    .zip(TEMPLE_IMAGES)
    .map(|(text, image)| Slide { text: (*text).to_string(), image_url: image.to_string() })
    .collect()
}

static EN: LazyLock<HeroContent> = LazyLock::new(|| HeroContent {
  slides: slides([
    "Welcome to the Ashram",
    "Walk the Path of Devotion",
    "Join Our Sacred Celebrations",
    "Serve Through Seva",
    "Find Peace Within",
  ]),
  cta: "Explore Now".to_string(),
  background: ImageRef {
    src: "/images/hero-background.jpg".to_string(),
    alt: "Temple at sunrise".to_string(),
  },
});

static HI: LazyLock<HeroContent> = LazyLock::new(|| HeroContent {
  slides: slides([
    "आश्रम में आपका स्वागत है",
    "भक्ति के मार्ग पर चलें",
    "हमारे पावन उत्सवों में शामिल हों",
    "सेवा के माध्यम से योगदान करें",
    "अपने भीतर शांति पाएं",
  ]),
  cta: "अभी देखें".to_string(),
  background: ImageRef {
    src: "/images/hero-background.jpg".to_string(),
    alt: "सूर्योदय के समय मंदिर".to_string(),
  },
});

impl ContentShape for HeroContent {
  const KIND: ShapeKind = ShapeKind::Hero;

  fn defaults(locale: Locale) -> &'static Self {
    match locale {
      Locale::En => &EN,
      Locale::Hi => &HI,
    }
  }
}
