pub mod auth;
pub mod pages;
pub mod residents;
pub mod services;

use serde::Deserialize;

use crate::error::DirectoryError;

/// `?q=` for the JSON search endpoints; absent means empty.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Detail routes only match integer ids; anything else is a missing record.
pub(crate) fn parse_id(raw: &str) -> Result<i64, DirectoryError> {
    raw.parse::<i64>().map_err(|_| DirectoryError::NotFound)
}
