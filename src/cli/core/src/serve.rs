/* src/cli/core/src/serve.rs */

use anyhow::{Context, Result, anyhow};
use vani_content::{FallbackStore, StaticTokens};
use vani_server_axum::ContentProxy;

use crate::config::VaniConfig;
use crate::ui;

pub async fn run_serve(config: &VaniConfig, port: Option<u16>) -> Result<()> {
  let port = port.unwrap_or(config.server.port);
  let addr = format!("{}:{port}", config.server.host);

  ui::banner("serve");
  ui::arrow(&format!("upstream {}", config.backend.url));

  let mut proxy = ContentProxy::new(config.client_config());

  if let Some(path) = &config.fallback.file {
    let store = FallbackStore::load_or_empty(path)
      .with_context(|| format!("failed to load fallback content from {}", path.display()))?;
    if store.is_empty() {
      ui::warn(&format!("fallback file {} has no pages", path.display()));
    } else {
      ui::ok(&format!("{} fallback pages from {}", store.len(), path.display()));
    }
    proxy = proxy.fallback(store);
  }

  if config.auth.tokens.is_empty() {
    ui::detail("writes are authorized by the backend only");
  } else {
    ui::ok(&format!("{} write tokens configured", config.auth.tokens.len()));
    proxy = proxy.verifier(StaticTokens::new(config.auth.tokens.iter().cloned()));
  }

  ui::arrow(&format!("listening on {addr}"));
  proxy.serve(&addr).await.map_err(|e| anyhow!("proxy server failed: {e}"))
}
