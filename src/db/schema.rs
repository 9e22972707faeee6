//! SQL DDL for the directory store.

/// SQLite schema with:
/// - `user`: residents; `email` UNIQUE, `password` holds an argon2 PHC string
/// - `service`: community service providers
///
/// Table names match the singular form so an existing `community.db` opens as-is.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    house_number TEXT NOT NULL,
    phone_number TEXT NULL
);

CREATE TABLE IF NOT EXISTS service (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    address TEXT NOT NULL
);
"#;
