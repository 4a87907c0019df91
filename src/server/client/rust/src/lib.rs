/* src/server/client/rust/src/lib.rs */

mod client;
mod config;
mod error;
mod live;
mod resolver;
mod write;

#[cfg(test)]
mod tests;

pub use client::ContentClient;
pub use config::{
  BACKEND_URL_ENV, ClientConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT, PUBLIC_URL_ENV,
};
pub use error::FetchError;
pub use live::LiveContent;
pub use resolver::ContentResolver;

/// Re-export the content core for convenience
pub use vani_content;
