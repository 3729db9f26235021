//! Store traits for the two site tables.
//!
//! Implemented by storage backends (e.g. `analytiq-store-sqlite`). The form
//! workflow in [`crate::forms`] and the web layer depend on these traits, not
//! on any concrete backend.
//!
//! Both stores are insert-only. Neither exposes updates, deletes or general
//! reads.

use std::future::Future;

use crate::{
  Result,
  contact::{ContactMessage, NewContactMessage},
  subscriber::{NewSubscriber, Subscriber},
};

// ─── Subscribers ─────────────────────────────────────────────────────────────

/// The newsletter subscriber table.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait SubscriptionStore: Send + Sync {
  /// Ensure the subscriber table exists. Idempotent; existing rows are left
  /// untouched.
  fn initialize_subscribers(
    &self,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  /// Whether a subscriber with exactly this e-mail is already stored.
  fn is_registered<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<bool>> + Send + 'a;

  /// Insert a subscriber and return the stored row.
  ///
  /// Fails with [`Error::DuplicateEmail`](crate::Error::DuplicateEmail) if the
  /// address is already on file, including when a concurrent insert wins the
  /// race. Nothing is written on failure.
  fn add_subscriber(
    &self,
    input: NewSubscriber,
  ) -> impl Future<Output = Result<Subscriber>> + Send + '_;
}

// ─── Contact messages ────────────────────────────────────────────────────────

/// The contact-form submission table.
pub trait ContactStore: Send + Sync {
  /// Ensure the contacts table exists. Idempotent.
  fn initialize_contacts(&self) -> impl Future<Output = Result<()>> + Send + '_;

  /// Append a contact message. Only fails on a storage fault.
  fn add_contact_message(
    &self,
    input: NewContactMessage,
  ) -> impl Future<Output = Result<ContactMessage>> + Send + '_;
}
