//! Newsletter subscribers.
//!
//! A subscriber row is written once, when the newsletter form is accepted,
//! and never modified afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::validation::{EmailAddress, NonEmptyText};

/// A persisted newsletter subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
  /// Store-assigned, monotonically increasing.
  pub id:         i64,
  pub name:       String,
  /// Unique across all subscribers, compared byte-for-byte.
  pub email:      String,
  /// Assigned by the storage engine at insertion.
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::SubscriptionStore::add_subscriber`].
/// `id` and `created_at` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
  pub name:  NonEmptyText,
  pub email: EmailAddress,
}
