//! [`SqliteStore`] — the SQLite implementation of [`SubscriptionStore`] and
//! [`ContactStore`].

use std::path::Path;

use analytiq_core::{
  contact::{ContactMessage, NewContactMessage},
  store::{ContactStore, SubscriptionStore},
  subscriber::{NewSubscriber, Subscriber},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  encode::{RawContactMessage, RawSubscriber, is_unique_violation},
  schema,
};

/// Applied to every new connection. Not part of the schema, so it runs on
/// open rather than in `initialize`.
const PRAGMAS: &str = "PRAGMA journal_mode = WAL;";

// ─── Store ───────────────────────────────────────────────────────────────────

/// The site's tables backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The file is
/// closed when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database file at `path`.
  ///
  /// Tables are not created here; call [`SqliteStore::initialize`] once at
  /// startup.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.apply_pragmas().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.apply_pragmas().await?;
    Ok(store)
  }

  /// Create every table the site uses. Idempotent.
  pub async fn initialize(&self) -> Result<()> {
    self.create_table(schema::NEWSLETTER).await?;
    self.create_table(schema::CONTACTS).await
  }

  /// All subscribers in insertion order.
  pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
    let raws: Vec<RawSubscriber> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, created_at FROM newsletter ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], RawSubscriber::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubscriber::into_subscriber).collect()
  }

  /// All contact messages in insertion order.
  pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
    let raws: Vec<RawContactMessage> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, message, created_at FROM contacts ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], RawContactMessage::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawContactMessage::into_contact_message)
      .collect()
  }

  async fn apply_pragmas(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn create_table(&self, ddl: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(ddl)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn email_exists(&self, email: String) -> Result<bool> {
    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM newsletter WHERE email = ?1",
              rusqlite::params![email],
              |_| Ok(()),
            )
            .optional()?
            .is_some(),
        )
      })
      .await?;
    Ok(found)
  }

  /// Insert a subscriber row. Returns `None` if the e-mail is already taken.
  async fn insert_subscriber(
    &self,
    name: String,
    email: String,
  ) -> Result<Option<Subscriber>> {
    let raw: Option<RawSubscriber> = self
      .conn
      .call(move |conn| {
        let inserted = conn.query_row(
          "INSERT INTO newsletter (name, email) VALUES (?1, ?2)
           RETURNING id, name, email, created_at",
          rusqlite::params![name, email],
          RawSubscriber::from_row,
        );
        match inserted {
          Ok(raw) => Ok(Some(raw)),
          Err(e) if is_unique_violation(&e) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    raw.map(RawSubscriber::into_subscriber).transpose()
  }

  async fn insert_contact_message(
    &self,
    name: String,
    email: String,
    message: String,
  ) -> Result<ContactMessage> {
    let raw: RawContactMessage = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO contacts (name, email, message) VALUES (?1, ?2, ?3)
           RETURNING id, name, email, message, created_at",
          rusqlite::params![name, email, message],
          RawContactMessage::from_row,
        )?)
      })
      .await?;

    raw.into_contact_message()
  }
}

// ─── SubscriptionStore impl ──────────────────────────────────────────────────

impl SubscriptionStore for SqliteStore {
  async fn initialize_subscribers(&self) -> analytiq_core::Result<()> {
    Ok(self.create_table(schema::NEWSLETTER).await?)
  }

  async fn is_registered(&self, email: &str) -> analytiq_core::Result<bool> {
    Ok(self.email_exists(email.to_owned()).await?)
  }

  async fn add_subscriber(
    &self,
    input: NewSubscriber,
  ) -> analytiq_core::Result<Subscriber> {
    let email = input.email.into_inner();
    self
      .insert_subscriber(input.name.into_inner(), email.clone())
      .await?
      .ok_or(analytiq_core::Error::DuplicateEmail(email))
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  async fn initialize_contacts(&self) -> analytiq_core::Result<()> {
    Ok(self.create_table(schema::CONTACTS).await?)
  }

  async fn add_contact_message(
    &self,
    input: NewContactMessage,
  ) -> analytiq_core::Result<ContactMessage> {
    Ok(
      self
        .insert_contact_message(
          input.name.into_inner(),
          input.email.into_inner(),
          input.message.into_inner(),
        )
        .await?,
    )
  }
}
