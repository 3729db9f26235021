//! SQL schema for the site database.
//!
//! The DDL matches the layout earlier deployments created, so an existing
//! `newsletter.db` opens unchanged. Each table has its own batch because each
//! store initialises only the table it owns.

/// Newsletter subscribers. `email` is unique under the default `BINARY`
/// collation, i.e. compared byte-for-byte.
pub const NEWSLETTER: &str = "
CREATE TABLE IF NOT EXISTS newsletter (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

/// Contact-form submissions; append-only, no uniqueness.
pub const CONTACTS: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";
