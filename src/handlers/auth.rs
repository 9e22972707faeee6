use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::info;

use crate::error::DirectoryError;
use crate::middleware::redirect_found;
use crate::middleware::session::{clear_session, open_session};
use crate::server::router::DirectoryState;
use crate::service::{self, SignupRequest};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct SigninForm {
    pub email: String,
    pub password: String,
}

/// GET /signup
pub async fn signup_form() -> Html<String> {
    Html(views::signup_form(None))
}

/// POST /signup -> create the account, open a session, go to the homepage.
pub async fn signup_submit(
    State(state): State<DirectoryState>,
    jar: PrivateCookieJar,
    Form(form): Form<SignupRequest>,
) -> Result<Response, DirectoryError> {
    match service::signup(&state.storage, form).await {
        Ok(user) => {
            let jar = open_session(jar, &user, state.insecure_cookie)?;
            Ok((jar, redirect_found("/homepage")).into_response())
        }
        Err(e @ DirectoryError::DuplicateEmail) => {
            Ok(Html(views::signup_form(Some(&e.to_string()))).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /signin
pub async fn signin_form() -> Html<String> {
    Html(views::signin_form(None))
}

/// POST /signin
pub async fn signin_submit(
    State(state): State<DirectoryState>,
    jar: PrivateCookieJar,
    Form(form): Form<SigninForm>,
) -> Result<Response, DirectoryError> {
    match service::signin(&state.storage, &form.email, form.password).await {
        Ok(user) => {
            let jar = open_session(jar, &user, state.insecure_cookie)?;
            Ok((jar, redirect_found("/homepage")).into_response())
        }
        Err(e @ DirectoryError::InvalidCredentials) => {
            Ok(Html(views::signin_form(Some(&e.to_string()))).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /logout -> drop the session whatever its state.
pub async fn logout(jar: PrivateCookieJar) -> Response {
    info!("session cleared");
    (clear_session(jar), redirect_found("/")).into_response()
}
