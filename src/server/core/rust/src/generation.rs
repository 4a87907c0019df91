/* src/server/core/rust/src/generation.rs */

use crate::locale::Locale;
use crate::resolve::Resolution;

/// Handle for one in-flight fetch. Only the most recent ticket may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
  generation: u64,
  locale: Locale,
}

impl Ticket {
  pub fn locale(&self) -> Locale {
    self.locale
  }
}

/// Per-component holder of the rendered content. Every locale change starts
/// a new generation; responses that belong to an older generation are dropped
/// instead of overwriting newer content.
#[derive(Debug)]
pub struct ContentSlot<S> {
  generation: u64,
  settled: u64,
  locale: Locale,
  current: Option<Resolution<S>>,
}

impl<S> ContentSlot<S> {
  pub fn new(locale: Locale) -> Self {
    Self { generation: 0, settled: 0, locale, current: None }
  }

  /// Start a fetch for `locale`, superseding any fetch still in flight.
  pub fn begin(&mut self, locale: Locale) -> Ticket {
    self.generation += 1;
    self.locale = locale;
    Ticket { generation: self.generation, locale }
  }

  /// Store `resolution` if `ticket` is still current. Returns whether it was kept.
  pub fn settle(&mut self, ticket: Ticket, resolution: Resolution<S>) -> bool {
    if ticket.generation != self.generation {
      tracing::debug!(
        stale = ticket.generation,
        current = self.generation,
        locale = %ticket.locale,
        "discarding stale content response"
      );
      return false;
    }
    self.current = Some(resolution);
    self.settled = ticket.generation;
    true
  }

  pub fn is_current(&self, ticket: Ticket) -> bool {
    ticket.generation == self.generation
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  /// Last accepted resolution, possibly for a previous locale.
  pub fn current(&self) -> Option<&Resolution<S>> {
    self.current.as_ref()
  }

  /// Last accepted resolution only if it belongs to the latest fetch.
  pub fn fresh(&self) -> Option<&Resolution<S>> {
    self.current.as_ref().filter(|_| self.settled == self.generation)
  }
}
