//! Database module: models and schema for the directory tables.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and their public projections
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: the storage handle shared by all requests

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewService, NewUser, Resident, Service, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{DirectoryStorage, SEARCH_LIMIT, SqlitePool};
