use axum::extract::{FromRef, FromRequestParts};
use axum::http::{StatusCode, header, request::Parts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};

use crate::middleware::session::{SessionUser, read_session};

/// `302 Found` to `location`.
pub fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Login gate for protected routes.
///
/// Resolves to the signed-in user, or rejects with a redirect to the landing
/// page. Place it before body extractors so the gate runs first.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionUser);

impl<S> FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match PrivateCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        read_session(&jar)
            .map(Self)
            .ok_or_else(|| redirect_found("/"))
    }
}
