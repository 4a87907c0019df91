/* src/cli/core/src/main.rs */

mod config;
mod defaults;
mod get;
mod pull;
mod serve;
mod set;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vani_content::{ContentKey, Locale, PageKey};

use config::{VaniConfig, resolve_config};

#[derive(Parser)]
#[command(name = "vani", about = "Vani page-content CLI", version)]
struct Cli {
  /// Path to vani.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the page-content proxy
  Serve {
    /// Listen port (overrides vani.toml and PORT)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Print render-ready content for one component
  Get {
    locale: String,
    page: String,
    component: String,
    /// Print the backend envelope as-is instead of merged content
    #[arg(long)]
    raw: bool,
  },
  /// Update one component on the backend
  Set {
    locale: String,
    page: String,
    component: String,
    /// Inline JSON, or @path to read it from a file
    #[arg(short, long)]
    data: String,
    /// Bearer token sent with the write
    #[arg(short, long)]
    token: Option<String>,
  },
  /// Show built-in defaults, or list every registered component
  Defaults {
    page: Option<String>,
    component: Option<String>,
    #[arg(short, long, default_value = "en")]
    locale: String,
  },
  /// Snapshot a live page into a fallback file
  Pull {
    locale: String,
    page: String,
    /// Fallback file to update (defaults to fallback.file in vani.toml)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
}

fn init_tracing(default: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<VaniConfig> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (path, config) = resolve_config(explicit, &cwd, |name| std::env::var(name).ok())?;
  match path {
    Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
    None => tracing::debug!("no vani.toml found, using defaults"),
  }
  Ok(config)
}

fn parse_locale(locale: &str) -> Result<Locale> {
  locale.parse::<Locale>().with_context(|| format!("expected one of: {}", supported_locales()))
}

fn supported_locales() -> String {
  Locale::all().map(Locale::as_str).join(", ")
}

fn content_key(locale: &str, page: String, component: String) -> Result<ContentKey> {
  Ok(ContentKey::new(parse_locale(locale)?, page, component)?)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(if matches!(cli.command, Command::Serve { .. }) { "info" } else { "warn" });
  let config = load_config(cli.config)?;

  let result = match cli.command {
    Command::Serve { port } => serve::run_serve(&config, port).await,
    Command::Get { locale, page, component, raw } => {
      let key = content_key(&locale, page, component)?;
      get::run_get(&config, &key, raw).await
    }
    Command::Set { locale, page, component, data, token } => {
      let key = content_key(&locale, page, component)?;
      set::run_set(&config, &key, &data, token.as_deref()).await
    }
    Command::Defaults { page, component, locale } => {
      defaults::run_defaults(page.as_deref(), component.as_deref(), parse_locale(&locale)?)
    }
    Command::Pull { locale, page, out } => {
      let key = PageKey::new(parse_locale(&locale)?, page)?;
      let out = out
        .or_else(|| config.fallback.file.clone())
        .unwrap_or_else(|| PathBuf::from("fallback.json"));
      pull::run_pull(&config, &key, &out).await
    }
  };

  if let Err(err) = result {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
  Ok(())
}
