use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};

use crate::db::Resident;
use crate::error::DirectoryError;
use crate::handlers::{SearchQuery, parse_id};
use crate::middleware::RequireSession;
use crate::server::router::DirectoryState;
use crate::views;

/// GET /residents
pub async fn residents_page(_user: RequireSession) -> Html<String> {
    Html(views::residents_page())
}

/// GET /api/search_residents?q=
pub async fn search_residents(
    _user: RequireSession,
    State(state): State<DirectoryState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Resident>>, DirectoryError> {
    let residents = state.storage.search_residents(&query.q).await?;
    Ok(Json(residents))
}

/// GET /residents/{id}
pub async fn resident_detail(
    _user: RequireSession,
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<Html<String>, DirectoryError> {
    let resident = state.storage.get_resident(parse_id(&id)?).await?;
    Ok(Html(views::resident_detail(&resident)))
}
