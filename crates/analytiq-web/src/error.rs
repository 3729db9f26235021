//! Error types and axum `IntoResponse` implementation.
//!
//! Every error body is a [`Feedback`] so the presentation layer can show the
//! message as-is.

use analytiq_core::forms::Feedback;
use axum::{
  Json,
  extract::rejection::FormRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::blog::BlogError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("newsletter submission failed: {0}")]
  Subscribe(#[source] analytiq_core::Error),

  #[error("contact submission failed: {0}")]
  Contact(#[source] analytiq_core::Error),

  #[error("blog unavailable: {0}")]
  Blog(#[from] BlogError),

  /// The request body could not be read as the expected form.
  #[error("unreadable form: {0}")]
  Rejected(#[from] FormRejection),
}

fn status_for(e: &analytiq_core::Error) -> StatusCode {
  match e {
    analytiq_core::Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
    analytiq_core::Error::DuplicateEmail(_) => StatusCode::CONFLICT,
    analytiq_core::Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

fn log(e: &analytiq_core::Error) {
  if let analytiq_core::Error::Storage(_) = e {
    tracing::error!(error = %e, "form submission not stored");
  } else {
    tracing::debug!(error = %e, "form submission rejected");
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Subscribe(e) => {
        log(&e);
        (status_for(&e), Json(Feedback::subscribe_failed(&e))).into_response()
      }
      Error::Contact(e) => {
        log(&e);
        (status_for(&e), Json(Feedback::contact_failed(&e))).into_response()
      }
      Error::Blog(e) => {
        let status = match e {
          BlogError::NotFound(_) => StatusCode::NOT_FOUND,
          BlogError::Malformed(_) | BlogError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
          }
        };
        tracing::warn!(error = %e, "blog entries unavailable");
        (status, Json(Feedback::error(e.display_message()))).into_response()
      }
      Error::Rejected(e) => {
        tracing::debug!(error = %e, "form body rejected");
        (
          StatusCode::BAD_REQUEST,
          Json(Feedback::error("No se pudo leer el formulario enviado.")),
        )
          .into_response()
      }
    }
  }
}
