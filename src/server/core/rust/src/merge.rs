/* src/server/core/rust/src/merge.rs */

//! Field-shape-aware merging of partial remote content over complete defaults.
//! Every function here is total: malformed or missing remote data degrades to
//! the default, never to an error.

use serde_json::Value;

use crate::envelope::ContentMap;

/// A content value that can be rebuilt from a remote JSON object, taking
/// every missing or malformed field from a complete default.
pub trait Normalize: Clone {
  fn normalize(remote: &ContentMap, default: &Self) -> Self;
}

/// How many elements a merged list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slots {
  /// As many as the remote side sent.
  Remote,
  /// Exactly this many; short remote lists are padded from the defaults.
  Fixed(usize),
}

/// Scalar rule: a non-empty remote string, else the default.
pub fn merge_text(remote: Option<&Value>, default: &str) -> String {
  match remote {
    Some(Value::String(s)) if !s.is_empty() => s.clone(),
    _ => default.to_string(),
  }
}

/// Nested object rule: normalize sub-fields when the remote value is an object.
pub fn merge_object<T: Normalize>(remote: Option<&Value>, default: &T) -> T {
  match remote {
    Some(Value::Object(map)) => T::normalize(map, default),
    _ => default.clone(),
  }
}

/// Array rule. A non-empty remote array is normalized element by element
/// against the default at the same index, cycling through the defaults when
/// the remote side is longer. Absent, non-array or empty values yield the
/// defaults verbatim.
pub fn merge_list<T: Normalize>(remote: Option<&Value>, defaults: &[T], slots: Slots) -> Vec<T> {
  let items = match remote {
    Some(Value::Array(items)) if !items.is_empty() && !defaults.is_empty() => items,
    _ => return defaults.to_vec(),
  };

  let cycled = |i: usize| &defaults[i % defaults.len()];
  let mut merged: Vec<T> =
    items.iter().enumerate().map(|(i, item)| merge_object(Some(item), cycled(i))).collect();

  if let Slots::Fixed(n) = slots {
    merged.truncate(n);
    let filled = merged.len();
    merged.extend((filled..n).map(|i| cycled(i).clone()));
  }
  merged
}
