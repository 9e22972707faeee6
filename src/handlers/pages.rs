use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::middleware::session::read_session;
use crate::middleware::{RequireSession, redirect_found};
use crate::views;

/// GET / -> homepage when signed in, landing page otherwise.
pub async fn index(jar: PrivateCookieJar) -> Response {
    if read_session(&jar).is_some() {
        return redirect_found("/homepage");
    }
    Html(views::landing()).into_response()
}

/// GET /homepage
pub async fn homepage(RequireSession(user): RequireSession) -> Html<String> {
    Html(views::homepage(&user.user_name))
}
