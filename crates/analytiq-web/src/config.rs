//! Server configuration.
//!
//! Sources, later ones overriding earlier ones: built-in defaults, the TOML
//! file passed with `--config` (optional), then `ANALYTIQ_*` environment
//! variables (e.g. `ANALYTIQ_PORT=9000`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  /// SQLite file holding the newsletter and contacts tables.
  pub database_path:     PathBuf,
  pub blog_entries_path: PathBuf,
}

impl ServerConfig {
  /// Read configuration from defaults, `file` (if it exists) and the
  /// environment. A leading `~/` in either path is expanded.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    let mut cfg: ServerConfig = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000_i64)?
      .set_default("database_path", "newsletter.db")?
      .set_default("blog_entries_path", "blog_entries.json")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ANALYTIQ"))
      .build()?
      .try_deserialize()?;

    cfg.database_path = expand_tilde(&cfg.database_path);
    cfg.blog_entries_path = expand_tilde(&cfg.blog_entries_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
