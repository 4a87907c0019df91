/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::VaniConfig;

pub const CONFIG_FILE: &str = "vani.toml";
/// Explicit config path, used when `--config` is absent.
pub const CONFIG_ENV: &str = "VANI_CONFIG";

/// Walk upward from `start` to find `vani.toml`, like Cargo.toml discovery
pub fn find_vani_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

/// Parse and validate. A relative `fallback.file` is taken relative to the file.
pub fn load_vani_config(path: &Path) -> Result<VaniConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: VaniConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if let (Some(file), Some(dir)) = (&config.fallback.file, path.parent()) {
    if file.is_relative() {
      config.fallback.file = Some(dir.join(file));
    }
  }
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// `--config`, then `VANI_CONFIG`, then upward discovery from `cwd`. Without
/// any file the built-in defaults apply. Environment overrides go last.
pub fn resolve_config(
  explicit: Option<PathBuf>,
  cwd: &Path,
  env: impl Fn(&str) -> Option<String>,
) -> Result<(Option<PathBuf>, VaniConfig)> {
  let path = explicit
    .or_else(|| env(CONFIG_ENV).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
    .or_else(|| find_vani_config(cwd).ok());

  let mut config = match &path {
    Some(p) => load_vani_config(p)?,
    None => VaniConfig::default(),
  };
  config.apply_env(env)?;
  config.validate()?;
  Ok((path, config))
}
