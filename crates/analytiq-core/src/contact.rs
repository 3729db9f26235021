//! Contact-form submissions.
//!
//! Every contact form on the site (services, demo, contact page) feeds the
//! same append-only table. Repeated identical submissions are kept as
//! separate rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::validation::{EmailAddress, NonEmptyText};

/// A persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::ContactStore::add_contact_message`].
#[derive(Debug, Clone)]
pub struct NewContactMessage {
  pub name:    NonEmptyText,
  pub email:   EmailAddress,
  pub message: NonEmptyText,
}
