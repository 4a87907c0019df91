/* src/server/client/rust/src/live.rs */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use vani_content::{ContentKey, ContentShape, ContentSlot, Locale, Resolution};

use crate::resolver::ContentResolver;

/// Content for one component that follows locale changes.
///
/// Each [`LiveContent::switch_locale`] starts an independent fetch; a fetch
/// that settles after a newer switch is discarded, so the slot never shows
/// content for a locale the caller has already left.
pub struct LiveContent<S> {
  resolver: ContentResolver,
  key: ContentKey,
  slot: Arc<Mutex<ContentSlot<S>>>,
}

fn lock<S>(slot: &Mutex<ContentSlot<S>>) -> MutexGuard<'_, ContentSlot<S>> {
  slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: ContentShape> LiveContent<S> {
  pub fn new(resolver: ContentResolver, key: ContentKey) -> Self {
    let slot = Arc::new(Mutex::new(ContentSlot::new(key.locale)));
    Self { resolver, key, slot }
  }

  /// Start loading `locale`. The task yields whether its response was kept.
  pub fn switch_locale(&self, locale: Locale) -> JoinHandle<bool> {
    let key = self.key.with_locale(locale);
    let ticket = lock(&self.slot).begin(locale);
    let resolver = self.resolver.clone();
    let slot = Arc::clone(&self.slot);

    tokio::spawn(async move {
      let resolution = resolver.resolve::<S>(&key).await;
      lock(&slot).settle(ticket, resolution)
    })
  }

  pub fn locale(&self) -> Locale {
    lock(&self.slot).locale()
  }

  /// Latest accepted resolution, if any fetch has settled.
  pub fn snapshot(&self) -> Option<Resolution<S>> {
    lock(&self.slot).current().cloned()
  }

  /// What to render right now: settled content for the current locale, or
  /// that locale's defaults while its fetch is still in flight.
  pub fn render(&self) -> S {
    let slot = lock(&self.slot);
    let locale = slot.locale();
    match slot.fresh() {
      Some(resolution) => resolution.content.clone(),
      None => S::defaults(locale).clone(),
    }
  }
}
