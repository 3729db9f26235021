//! `POST /newsletter` — the newsletter sign-up form.

use analytiq_core::{
  forms::{self, Feedback, SubscribeForm},
  store::{ContactStore, SubscriptionStore},
};
use axum::{
  Form, Json,
  extract::{State, rejection::FormRejection},
  http::StatusCode,
  response::IntoResponse,
};

use crate::{AppState, error::Error};

/// Returns 201 with success feedback, or an error [`Feedback`] with 400
/// (invalid input), 409 (already subscribed) or 500 (storage fault).
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<SubscribeForm>, FormRejection>,
) -> Result<impl IntoResponse, Error>
where
  S: SubscriptionStore + ContactStore + Clone + 'static,
{
  let Form(form) = form?;
  let subscriber = forms::subscribe(state.store.as_ref(), form)
    .await
    .map_err(Error::Subscribe)?;

  tracing::info!(id = subscriber.id, "new newsletter subscriber");
  Ok((StatusCode::CREATED, Json(Feedback::subscribed(&subscriber))))
}
