/* src/cli/core/src/ui.rs */

//! Status lines go to stderr so command output on stdout stays pipeable.

use vani_content::DataSource;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  eprintln!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  eprintln!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  eprintln!("        {msg}");
}

pub fn banner(cmd: &str) {
  eprintln!();
  eprintln!("  {BOLD}Vani{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  eprintln!();
}

/// `api` in green, `fallback` in yellow.
pub fn source(source: DataSource) -> String {
  let color = match source {
    DataSource::Api => GREEN,
    DataSource::Fallback => YELLOW,
  };
  format!("{color}{}{RESET}", source.as_str())
}

/// Command output proper: pretty JSON on stdout.
pub fn json(value: &impl serde::Serialize) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

pub fn row(cols: &[&str], widths: &[usize]) {
  let line: Vec<String> =
    cols.iter().zip(widths).map(|(col, width)| format!("{col:<width$}")).collect();
  println!("  {CYAN}{}{RESET}", line.join("  ").trim_end());
}
