//! Error types for `analytiq-core`.

use thiserror::Error;

/// Why a form submission was rejected before reaching a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
  #[error("required field is empty: {0}")]
  MissingField(&'static str),

  #[error("malformed e-mail address: {0:?}")]
  MalformedEmail(String),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("e-mail already subscribed: {0}")]
  DuplicateEmail(String),

  #[error("invalid input: {0}")]
  InvalidInput(#[from] InvalidInput),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
