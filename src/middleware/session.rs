//! Session state kept in an encrypted private cookie.
//!
//! The cookie carries the signed-in user's id and display name as JSON. A
//! cookie that fails to decrypt (wrong key, tampering) is dropped by the jar,
//! and one that fails to decode is treated the same as no session.

use crate::error::DirectoryError;
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SESSION_COOKIE: &str = "directory_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub user_name: String,
}

pub fn read_session(jar: &PrivateCookieJar) -> Option<SessionUser> {
    let cookie = jar.get(SESSION_COOKIE)?;
    serde_json::from_str(cookie.value())
        .inspect_err(|e| debug!(error = %e, "discarding undecodable session cookie"))
        .ok()
}

pub fn open_session(
    jar: PrivateCookieJar,
    user: &SessionUser,
    insecure_cookie: bool,
) -> Result<PrivateCookieJar, DirectoryError> {
    let value = serde_json::to_string(user)?;
    Ok(jar.add(build_cookie(value, insecure_cookie)))
}

pub fn clear_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(clear_cookie())
}

fn build_cookie(value: String, insecure_cookie: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(!insecure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
