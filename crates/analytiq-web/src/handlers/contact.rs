//! `POST /contact` — shared by every contact form on the site.

use analytiq_core::{
  forms::{self, ContactForm, Feedback},
  store::{ContactStore, SubscriptionStore},
};
use axum::{
  Form, Json,
  extract::{State, rejection::FormRejection},
  http::StatusCode,
  response::IntoResponse,
};

use crate::{AppState, error::Error};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<ContactForm>, FormRejection>,
) -> Result<impl IntoResponse, Error>
where
  S: SubscriptionStore + ContactStore + Clone + 'static,
{
  let Form(form) = form?;
  let message = forms::contact(state.store.as_ref(), form)
    .await
    .map_err(Error::Contact)?;

  tracing::info!(id = message.id, "new contact message");
  Ok((StatusCode::CREATED, Json(Feedback::contacted(&message))))
}
