//! The static blog: a JSON array of posts kept next to the database.
//!
//! The file is read on every request so editors can publish by replacing it,
//! without restarting the server.

use std::{io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of `blog_entries.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
  pub title:   String,
  /// Free-form display date, e.g. "15 de enero de 2025".
  pub date:    String,
  pub summary: String,
  /// Full body shown by "read more".
  pub content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub emoji:   Option<String>,
}

#[derive(Debug, Error)]
pub enum BlogError {
  #[error("blog entries file not found: {0}")]
  NotFound(String),

  #[error("blog entries file is malformed: {0}")]
  Malformed(#[from] serde_json::Error),

  #[error("cannot read blog entries: {0}")]
  Io(#[source] io::Error),
}

impl BlogError {
  /// Text shown to site visitors in place of the post list.
  pub fn display_message(&self) -> &'static str {
    match self {
      BlogError::NotFound(_) => "No se encontró el archivo de entradas del blog.",
      BlogError::Malformed(_) | BlogError::Io(_) => {
        "Error al leer el archivo de entradas del blog."
      }
    }
  }
}

/// Load every post from `path`, in file order.
pub async fn load_posts(path: &Path) -> Result<Vec<BlogPost>, BlogError> {
  let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
    if e.kind() == io::ErrorKind::NotFound {
      BlogError::NotFound(path.display().to_string())
    } else {
      BlogError::Io(e)
    }
  })?;
  Ok(serde_json::from_str(&raw)?)
}
