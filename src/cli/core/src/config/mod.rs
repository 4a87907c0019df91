/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_ENV, CONFIG_FILE, find_vani_config, load_vani_config, resolve_config};
pub use types::VaniConfig;
