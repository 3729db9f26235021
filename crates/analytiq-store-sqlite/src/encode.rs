//! Row types and decoding helpers between SQLite columns and the domain types.
//!
//! `created_at` is filled by the column default `CURRENT_TIMESTAMP`, which
//! SQLite renders as `YYYY-MM-DD HH:MM:SS` in UTC. RFC 3339 strings are
//! accepted as well so rows inserted by external tools still decode.

use analytiq_core::{contact::ContactMessage, subscriber::Subscriber};
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_timestamp(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP) {
    return Ok(naive.and_utc());
  }
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Timestamp(format!("{s:?}: {e}")))
}

/// Returns true for a `UNIQUE` constraint violation, the only constraint the
/// schema can trip on validated input.
pub fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// A `newsletter` row as read from SQLite, before timestamp decoding.
pub struct RawSubscriber {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub created_at: String,
}

impl RawSubscriber {
  /// Column order: `id, name, email, created_at`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_subscriber(self) -> Result<Subscriber> {
    Ok(Subscriber {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      created_at: decode_timestamp(&self.created_at)?,
    })
  }
}

/// A `contacts` row as read from SQLite.
pub struct RawContactMessage {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub message:    String,
  pub created_at: String,
}

impl RawContactMessage {
  /// Column order: `id, name, email, message, created_at`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      message:    row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  pub fn into_contact_message(self) -> Result<ContactMessage> {
    Ok(ContactMessage {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      message:    self.message,
      created_at: decode_timestamp(&self.created_at)?,
    })
  }
}
