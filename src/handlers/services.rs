use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::db::{NewService, Service};
use crate::error::DirectoryError;
use crate::handlers::{SearchQuery, parse_id};
use crate::middleware::{RequireSession, redirect_found};
use crate::server::router::DirectoryState;
use crate::views;

/// GET /services
pub async fn services_page(_user: RequireSession) -> Html<String> {
    Html(views::services_page())
}

/// GET /api/search_services?q=
pub async fn search_services(
    _user: RequireSession,
    State(state): State<DirectoryState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Service>>, DirectoryError> {
    let services = state.storage.search_services(&query.q).await?;
    Ok(Json(services))
}

/// GET /services/{id}
pub async fn service_detail(
    _user: RequireSession,
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<Html<String>, DirectoryError> {
    let service = state.storage.get_service(parse_id(&id)?).await?;
    Ok(Html(views::service_detail(&service)))
}

/// GET /services/add
pub async fn add_service_form(_user: RequireSession) -> Html<String> {
    Html(views::add_service_form())
}

/// POST /services/add -> insert unconditionally, back to the listing.
pub async fn add_service_submit(
    RequireSession(user): RequireSession,
    State(state): State<DirectoryState>,
    Form(form): Form<NewService>,
) -> Result<Response, DirectoryError> {
    let id = state.storage.insert_service(form).await?;
    info!(service_id = id, added_by = user.user_id, "service added");
    Ok(redirect_found("/services").into_response())
}
