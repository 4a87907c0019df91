/* src/server/core/rust/src/lib.rs */

pub mod envelope;
pub mod errors;
pub mod fallback;
pub mod generation;
pub mod key;
pub mod locale;
pub mod merge;
pub mod registry;
pub mod resolve;
pub mod shapes;
pub mod token;

// Re-exports for ergonomic use
pub use envelope::{ContentEnvelope, ContentMap, PageComponent, PageEnvelope};
pub use errors::{BACKEND_UNAVAILABLE_MESSAGE, ContentError};
pub use fallback::FallbackStore;
pub use generation::{ContentSlot, Ticket};
pub use key::{ContentKey, PageKey};
pub use locale::{Locale, ResolveData, resolve_locale, resolve_request_locale};
pub use registry::RegistryEntry;
pub use resolve::{
  DATA_SOURCE_HEADER, DataSource, FetchOutcome, Resolution, resolve_component, resolve_kind,
};
pub use shapes::{
  CardsContent, ContentShape, EventsContent, HeroContent, QuotesContent, ShapeKind, TextContent,
  VersesContent,
};
pub use token::{AcceptAll, StaticTokens, TokenVerifier};
