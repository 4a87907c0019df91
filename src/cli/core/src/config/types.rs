/* src/cli/core/src/config/types.rs */

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use vani_client::{BACKEND_URL_ENV, ClientConfig, DEFAULT_BACKEND_URL, PUBLIC_URL_ENV};

/// Listen port when neither `vani.toml` nor `PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaniConfig {
  #[serde(default)]
  pub backend: BackendSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub fallback: FallbackSection,
  #[serde(default)]
  pub auth: AuthSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
  #[serde(default = "default_backend_url")]
  pub url: String,
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
  /// Target of the client-direct commands (`get`, `set`, `pull`). Falls back to `url`.
  #[serde(default)]
  pub public_url: Option<String>,
}

impl Default for BackendSection {
  fn default() -> Self {
    Self { url: default_backend_url(), timeout_ms: default_timeout_ms(), public_url: None }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

/// Snapshot file consulted when the backend rejects a read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackSection {
  pub file: Option<PathBuf>,
}

/// Write tokens the proxy accepts. Empty leaves authorization to the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSection {
  #[serde(default)]
  pub tokens: Vec<String>,
}

fn default_backend_url() -> String {
  DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_ms() -> u64 {
  5000
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  DEFAULT_PORT
}

impl VaniConfig {
  /// Environment wins over the file: `BACKEND_API_URL`, `NEXT_PUBLIC_API_URL`, `PORT`.
  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
      self.backend.url = url.trim().to_string();
    }
    if let Some(url) = lookup(PUBLIC_URL_ENV).filter(|v| !v.trim().is_empty()) {
      self.backend.public_url = Some(url.trim().to_string());
    }
    if let Some(port) = lookup(PORT_ENV).filter(|v| !v.trim().is_empty()) {
      self.server.port =
        port.trim().parse().with_context(|| format!("{PORT_ENV}=\"{port}\" is not a valid port"))?;
    }
    Ok(())
  }

  pub fn validate(&self) -> Result<()> {
    let urls = [
      ("backend.url", Some(&self.backend.url)),
      ("backend.public_url", self.backend.public_url.as_ref()),
    ];
    for (field, url) in urls {
      let Some(url) = url else { continue };
      if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("{field} \"{url}\" must start with http:// or https://");
      }
    }
    if self.backend.timeout_ms == 0 {
      bail!("backend.timeout_ms must be greater than 0");
    }
    if self.server.host.trim().is_empty() {
      bail!("server.host must not be empty");
    }
    if self.auth.tokens.iter().any(|t| t.trim().is_empty()) {
      bail!("auth.tokens must not contain empty tokens");
    }
    Ok(())
  }

  /// Upstream of the proxy.
  pub fn client_config(&self) -> ClientConfig {
    self.client_for(&self.backend.url)
  }

  /// Backend the CLI talks to directly: `public_url` when set, else the proxy upstream.
  pub fn direct_client_config(&self) -> ClientConfig {
    self.client_for(self.backend.public_url.as_deref().unwrap_or(&self.backend.url))
  }

  fn client_for(&self, url: &str) -> ClientConfig {
    ClientConfig::new(url).with_timeout(Duration::from_millis(self.backend.timeout_ms))
  }
}
