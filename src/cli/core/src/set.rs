/* src/cli/core/src/set.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use vani_content::ContentKey;

use crate::config::VaniConfig;
use crate::get::client;
use crate::ui;

/// `--data` is inline JSON, or `@path` naming a JSON file.
fn parse_data(data: &str) -> Result<serde_json::Value> {
  let (text, origin) = match data.strip_prefix('@') {
    Some(path) => {
      let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read {path}"))?;
      (text, path.to_string())
    }
    None => (data.to_string(), "--data".to_string()),
  };
  let value: serde_json::Value =
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {origin}"))?;
  if !value.is_object() {
    bail!("{origin} must be a JSON object such as {{\"content\": {{...}}}}");
  }
  Ok(value)
}

pub async fn run_set(
  config: &VaniConfig,
  key: &ContentKey,
  data: &str,
  token: Option<&str>,
) -> Result<()> {
  let patch = parse_data(data)?;
  let client = client(config)?;
  ui::arrow(&format!("PATCH {}", client.component_url(key)?));
  if token.is_none() {
    ui::warn("no token given, sending without Authorization");
  }

  let updated = client.update_component(key, &patch, token).await?;
  ui::ok(&format!("updated {key}"));
  ui::json(&updated)
}
