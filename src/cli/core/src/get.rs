/* src/cli/core/src/get.rs */

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use vani_client::{ContentClient, ContentResolver};
use vani_content::registry::lookup;
use vani_content::{ContentKey, FallbackStore, FetchOutcome};

use crate::config::VaniConfig;
use crate::ui;

pub(crate) fn client(config: &VaniConfig) -> Result<ContentClient> {
  ContentClient::new(config.direct_client_config()).context("failed to build HTTP client")
}

pub async fn run_get(config: &VaniConfig, key: &ContentKey, raw: bool) -> Result<()> {
  let client = client(config)?;
  ui::arrow(client.component_url(key)?.as_str());

  if raw {
    return match client.fetch_component(key).await {
      FetchOutcome::Fetched(envelope) => {
        ui::ok(&format!("{key} from {}", ui::source(vani_content::DataSource::Api)));
        ui::json(&envelope)
      }
      FetchOutcome::Rejected { status, message } => bail!("backend returned {status}: {message}"),
      FetchOutcome::Unavailable { reason } => bail!("backend unavailable: {reason}"),
    };
  }

  let entry = lookup(&key.page_id, &key.component_id)
    .with_context(|| format!("no content shape registered for {key} (use --raw)"))?;

  let mut resolver = ContentResolver::new(client);
  if let Some(path) = &config.fallback.file {
    let store = FallbackStore::load_or_empty(path)
      .with_context(|| format!("failed to load fallback content from {}", path.display()))?;
    resolver = resolver.with_fallback(Arc::new(store));
  }

  let resolution = resolver.resolve_kind(entry.kind, key).await;
  ui::ok(&format!("{key} ({}) from {}", entry.kind.as_str(), ui::source(resolution.source)));
  ui::json(&resolution.content)
}
