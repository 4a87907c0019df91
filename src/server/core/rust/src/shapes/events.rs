/* src/server/core/rust/src/shapes/events.rs */

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{ContentShape, ShapeKind};
use crate::envelope::ContentMap;
use crate::locale::Locale;
use crate::merge::{Normalize, Slots, merge_list, merge_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub title: String,
  /// Display string; the backend owns formatting.
  pub date: String,
  pub location: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsContent {
  pub heading: String,
  pub events: Vec<Event>,
}

impl Normalize for Event {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      title: merge_text(remote.get("title"), &default.title),
      date: merge_text(remote.get("date"), &default.date),
      location: merge_text(remote.get("location"), &default.location),
      description: merge_text(remote.get("description"), &default.description),
    }
  }
}

impl Normalize for EventsContent {
  fn normalize(remote: &ContentMap, default: &Self) -> Self {
    Self {
      heading: merge_text(remote.get("heading"), &default.heading),
      events: merge_list(remote.get("events"), &default.events, Slots::Remote),
    }
  }
}

fn event(title: &str, date: &str, location: &str, description: &str) -> Event {
  Event {
    title: title.to_string(),
    date: date.to_string(),
    location: location.to_string(),
    description: description.to_string(),
  }
}

static EN: LazyLock<EventsContent> = LazyLock::new(|| EventsContent {
  heading: "Upcoming Events".to_string(),
  events: vec![
    event(
      "Hanuman Jayanti",
      "Chaitra Purnima",
      "Main Temple",
      "Day-long celebration with abhishek, bhajans and prasad.",
    ),
    event(
      "Weekly Sundarkand Path",
      "Every Tuesday, 7 PM",
      "Satsang Hall",
      "Collective recitation of Sundarkand followed by aarti.",
    ),
  ],
});

static HI: LazyLock<EventsContent> = LazyLock::new(|| EventsContent {
  heading: "आगामी कार्यक्रम".to_string(),
  events: vec![
    event(
      "हनुमान जयंती",
      "चैत्र पूर्णिमा",
      "मुख्य मंदिर",
      "अभिषेक, भजन और प्रसाद के साथ पूरे दिन का उत्सव।",
    ),
    event(
      "साप्ताहिक सुंदरकांड पाठ",
      "हर मंगलवार, शाम 7 बजे",
      "सत्संग भवन",
      "सुंदरकांड का सामूहिक पाठ और उसके बाद आरती।",
    ),
  ],
});

impl ContentShape for EventsContent {
  const KIND: ShapeKind = ShapeKind::Events;

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
  fn extra_remote_events_cycle_defaults() {
    let remote = json!({ "events": [{ "title": "A" }, { "title": "B" }, { "title": "C" }] });
    let merged = EventsContent::merge(remote.as_object(), Locale::En);
    assert_eq!(merged.events.len(), 3);
    assert_eq!(merged.events[2].title, "C");
    assert_eq!(merged.events[2].location, "Main Temple");
  }
}
