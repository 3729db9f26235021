//! The form-submission workflow: raw form fields in, stored row or typed
//! error out, plus the display text for either outcome.
//!
//! | Form | Checks, in order |
//! |------|------------------|
//! | newsletter | fields present, e-mail syntax, not already registered |
//! | contact | fields present, e-mail syntax |

use serde::{Deserialize, Serialize};

use crate::{
  Error, InvalidInput, Result,
  contact::{ContactMessage, NewContactMessage},
  store::{ContactStore, SubscriptionStore},
  subscriber::{NewSubscriber, Subscriber},
  validation::{EmailAddress, NonEmptyText},
};

// ─── Raw form input ──────────────────────────────────────────────────────────

/// Fields of the newsletter form, exactly as submitted. Absent fields are
/// empty strings so they are reported as missing rather than as a decoding
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeForm {
  #[serde(default)]
  pub name:  String,
  #[serde(default)]
  pub email: String,
}

impl SubscribeForm {
  /// Blank fields are reported before e-mail syntax.
  pub fn validate(self) -> Result<NewSubscriber, InvalidInput> {
    Ok(NewSubscriber {
      name:  NonEmptyText::parse("name", self.name)?,
      email: EmailAddress::parse(self.email)?,
    })
  }
}

/// Fields of any of the site's contact forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub message: String,
}

impl ContactForm {
  /// Every field is checked for presence before the e-mail syntax.
  pub fn validate(self) -> Result<NewContactMessage, InvalidInput> {
    let name = NonEmptyText::parse("name", self.name)?;
    let email = NonEmptyText::parse("email", self.email)?;
    let message = NonEmptyText::parse("message", self.message)?;
    Ok(NewContactMessage {
      name,
      email: EmailAddress::parse(email.into_inner())?,
      message,
    })
  }
}

// ─── Workflow ────────────────────────────────────────────────────────────────

/// Validate and store a newsletter subscription.
///
/// The registration pre-check gives the common duplicate case a cheap answer;
/// the store still reports [`Error::DuplicateEmail`] if another submission
/// inserts the same address in between.
pub async fn subscribe<S>(store: &S, form: SubscribeForm) -> Result<Subscriber>
where
  S: SubscriptionStore,
{
  let input = form.validate()?;
  if store.is_registered(input.email.as_ref()).await? {
    return Err(Error::DuplicateEmail(input.email.into_inner()));
  }
  store.add_subscriber(input).await
}

/// Validate and store a contact message.
pub async fn contact<S>(store: &S, form: ContactForm) -> Result<ContactMessage>
where
  S: ContactStore,
{
  let input = form.validate()?;
  store.add_contact_message(input).await
}

// ─── Feedback ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
  Success,
  Error,
}

/// What the presentation layer shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
  pub status:  FeedbackStatus,
  pub message: String,
}

const MALFORMED_EMAIL: &str =
  "Por favor, introduce un correo electrónico válido.";
const ALREADY_SUBSCRIBED: &str =
  "Este correo ya está registrado en nuestra Newsletter.";

impl Feedback {
  pub fn success(message: impl Into<String>) -> Self {
    Self { status: FeedbackStatus::Success, message: message.into() }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self { status: FeedbackStatus::Error, message: message.into() }
  }

  pub fn is_success(&self) -> bool { self.status == FeedbackStatus::Success }

  pub fn subscribed(subscriber: &Subscriber) -> Self {
    Self::success(format!(
      "¡Gracias {}! Te has unido a nuestra Newsletter.",
      subscriber.name
    ))
  }

  pub fn subscribe_failed(err: &Error) -> Self {
    match err {
      Error::InvalidInput(InvalidInput::MissingField(_)) => {
        Self::error("Por favor, completa todos los campos para suscribirte.")
      }
      Error::InvalidInput(InvalidInput::MalformedEmail(_)) => {
        Self::error(MALFORMED_EMAIL)
      }
      Error::DuplicateEmail(_) => Self::error(ALREADY_SUBSCRIBED),
      Error::Storage(e) => Self::storage(&**e),
    }
  }

  pub fn contacted(message: &ContactMessage) -> Self {
    Self::success(format!(
      "¡Gracias por tu mensaje, {}! Te contactaremos pronto a través de {}.",
      message.name, message.email
    ))
  }

  pub fn contact_failed(err: &Error) -> Self {
    match err {
      Error::InvalidInput(InvalidInput::MissingField(_)) => Self::error(
        "Por favor, completa todos los campos antes de enviar tu mensaje.",
      ),
      Error::InvalidInput(InvalidInput::MalformedEmail(_)) => {
        Self::error(MALFORMED_EMAIL)
      }
      Error::DuplicateEmail(_) => Self::storage(err),
      Error::Storage(e) => Self::storage(&**e),
    }
  }

  fn storage(err: &(dyn std::error::Error + Send + Sync)) -> Self {
    Self::error(format!("Error al guardar los datos: {err}"))
  }
}
