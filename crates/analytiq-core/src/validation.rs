//! Input validation shared by every form on the site.
//!
//! The e-mail check is a loose pattern match, not an RFC 5322 parser. It
//! accepts some addresses a mail server would refuse (`a@b..c`) and rejects
//! some valid internationalised ones (`usuario@dominio.españa`). Existing
//! subscribers were admitted under exactly this rule, so it must not be
//! tightened without a data migration.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::InvalidInput;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
    .expect("e-mail pattern is a valid regex")
});

/// Whether `s` looks like an e-mail address.
pub fn is_valid_email(s: &str) -> bool { EMAIL_PATTERN.is_match(s) }

// ─── EmailAddress ────────────────────────────────────────────────────────────

/// An e-mail address that passed [`is_valid_email`]. Stored verbatim; no case
/// folding or trimming is applied. A blank value is a missing field, as for
/// [`NonEmptyText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
  pub fn parse(value: impl Into<String>) -> Result<Self, InvalidInput> {
    let value = NonEmptyText::parse("email", value)?.into_inner();
    if !is_valid_email(&value) {
      return Err(InvalidInput::MalformedEmail(value));
    }
    Ok(Self(value))
  }

  pub fn into_inner(self) -> String { self.0 }
}

impl AsRef<str> for EmailAddress {
  fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for EmailAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── NonEmptyText ────────────────────────────────────────────────────────────

/// A required free-text field (name, message). Must contain at least one
/// non-whitespace character; the original text is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonEmptyText(String);

impl NonEmptyText {
  /// `field` names the form field in the resulting
  /// [`InvalidInput::MissingField`].
  pub fn parse(
    field: &'static str,
    value: impl Into<String>,
  ) -> Result<Self, InvalidInput> {
    let value = value.into();
    if value.trim().is_empty() {
      Err(InvalidInput::MissingField(field))
    } else {
      Ok(Self(value))
    }
  }

  pub fn into_inner(self) -> String { self.0 }
}

impl AsRef<str> for NonEmptyText {
  fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for NonEmptyText {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
