use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full `user` row, password hash included. Never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub house_number: String,
    pub phone_number: Option<String>,
}

/// Public view of a resident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Resident {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub house_number: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

/// A user about to be inserted; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub house_number: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewService {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}
