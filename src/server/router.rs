use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;

use crate::db::DirectoryStorage;
use crate::handlers::{auth, pages, residents, services};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct DirectoryState {
    pub storage: DirectoryStorage,
    pub key: Key,
    pub insecure_cookie: bool,
}

impl DirectoryState {
    pub fn new(storage: DirectoryStorage, key: Key, insecure_cookie: bool) -> Self {
        Self {
            storage,
            key,
            insecure_cookie,
        }
    }
}

impl FromRef<DirectoryState> for Key {
    fn from_ref(state: &DirectoryState) -> Self {
        state.key.clone()
    }
}

pub fn directory_router(state: DirectoryState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/signup", get(auth::signup_form).post(auth::signup_submit))
        .route("/signin", get(auth::signin_form).post(auth::signin_submit))
        .route("/logout", get(auth::logout))
        .route("/homepage", get(pages::homepage))
        .route("/residents", get(residents::residents_page))
        .route("/residents/{id}", get(residents::resident_detail))
        .route("/api/search_residents", get(residents::search_residents))
        .route("/services", get(services::services_page))
        .route(
            "/services/add",
            get(services::add_service_form).post(services::add_service_submit),
        )
        .route("/services/{id}", get(services::service_detail))
        .route("/api/search_services", get(services::search_services))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
