/* src/cli/core/src/defaults.rs */

use anyhow::{Context, Result};
use vani_content::registry::{self, default_envelope, default_page};
use vani_content::{ContentKey, Locale, PageKey};

use crate::ui;

pub fn run_defaults(page: Option<&str>, component: Option<&str>, locale: Locale) -> Result<()> {
  match (page, component) {
    (None, _) => {
      list_registry();
      Ok(())
    }
    (Some(page), None) => {
      let key = PageKey::new(locale, page)?;
      let page = default_page(&key).with_context(|| format!("unknown page \"{key}\""))?;
      ui::json(&page)
    }
    (Some(page), Some(component)) => {
      let key = ContentKey::new(locale, page, component)?;
      let envelope =
        default_envelope(&key).with_context(|| format!("no built-in defaults for {key}"))?;
      ui::json(&envelope.content)
    }
  }
}

fn list_registry() {
  let rows = registry_rows();
  let header = ["COMPONENT", "SHAPE", "NAME"];
  let widths = [0, 1, 2].map(|i| rows.iter().map(|r| r[i].len()).fold(header[i].len(), usize::max));
  ui::row(&header, &widths);
  for row in &rows {
    ui::row(&[row[0].as_str(), row[1].as_str(), row[2].as_str()], &widths);
  }
}

fn registry_rows() -> Vec<[String; 3]> {
  registry::entries()
    .iter()
    .map(|e| {
      [format!("{}/{}", e.page_id, e.component_id), e.kind.as_str().to_string(), e.name.to_string()]
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rows_cover_registry() {
    let rows = registry_rows();
    assert_eq!(rows.len(), registry::entries().len());
    assert_eq!(rows[0], ["home/hero".to_string(), "hero".to_string(), "Hero".to_string()]);
    assert!(rows.iter().any(|r| r[0] == "bajrang-baan/content" && r[1] == "verses"));
  }

  #[test]
  fn unknown_component_is_error() {
    assert!(run_defaults(Some("home"), Some("footer"), Locale::En).is_err());
    assert!(run_defaults(Some("nowhere"), None, Locale::Hi).is_err());
  }
}
