/* src/cli/core/src/config/tests/discovery.rs */

use std::path::PathBuf;

use super::*;

fn no_env(_: &str) -> Option<String> {
  None
}

#[test]
fn finds_config_in_ancestor() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("vani.toml"), "[server]\nport = 4100\n").unwrap();
  let nested = dir.path().join("content/pages");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_vani_config(&nested).unwrap();
  assert_eq!(found, dir.path().canonicalize().unwrap().join(CONFIG_FILE));
}

#[test]
fn missing_config_uses_defaults() {
  let dir = tempfile::tempdir().unwrap();
  assert!(find_vani_config(dir.path()).is_err());

  let (path, config) = resolve_config(None, dir.path(), no_env).unwrap();
  // A vani.toml above the temp dir would be picked up; only check defaults when none was.
  if path.is_none() {
    assert_eq!(config.server.port, 3000);
  }
}

#[test]
fn relative_fallback_file_follows_config() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("vani.toml");
  std::fs::write(&path, "[fallback]\nfile = \"snapshots/fallback.json\"\n").unwrap();

  let config = load_vani_config(&path).unwrap();
  assert_eq!(config.fallback.file, Some(dir.path().join("snapshots/fallback.json")));
}

#[test]
fn explicit_path_beats_env_and_discovery() {
  let dir = tempfile::tempdir().unwrap();
  let explicit = dir.path().join("explicit.toml");
  let from_env = dir.path().join("env.toml");
  std::fs::write(&explicit, "[server]\nport = 4001\n").unwrap();
  std::fs::write(&from_env, "[server]\nport = 4002\n").unwrap();
  std::fs::write(dir.path().join("vani.toml"), "[server]\nport = 4003\n").unwrap();

  let env_path = from_env.to_string_lossy().to_string();
  let env = move |name: &str| (name == CONFIG_ENV).then(|| env_path.clone());

  let (path, config) = resolve_config(Some(explicit.clone()), dir.path(), &env).unwrap();
  assert_eq!(path, Some(explicit));
  assert_eq!(config.server.port, 4001);

  let (path, config) = resolve_config(None, dir.path(), &env).unwrap();
  assert_eq!(path, Some(from_env));
  assert_eq!(config.server.port, 4002);

  let (path, config) = resolve_config(None, dir.path(), no_env).unwrap();
  assert_eq!(path, Some(dir.path().canonicalize().unwrap().join(CONFIG_FILE)));
  assert_eq!(config.server.port, 4003);
}

#[test]
fn invalid_file_reports_path() {
  let dir = tempfile::tempdir().unwrap();
  let path: PathBuf = dir.path().join("vani.toml");
  std::fs::write(&path, "[backend]\nurl = \"ftp://nope\"\n").unwrap();
  let err = load_vani_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("ftp://nope"), "{err:#}");
}
