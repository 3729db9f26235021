//! Error type for `analytiq-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("timestamp parse error: {0}")]
  Timestamp(String),
}

impl From<rusqlite::Error> for Error {
  fn from(e: rusqlite::Error) -> Self { Self::Database(e.into()) }
}

impl From<Error> for analytiq_core::Error {
  fn from(e: Error) -> Self { Self::Storage(Box::new(e)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
