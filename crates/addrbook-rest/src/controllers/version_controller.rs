//! Service version endpoint.

use crate::{dto::VersionResponse, state::AppState};
use axum::{extract::State, routing::get, Json, Router};

/// Creates the version router.
pub fn router() -> Router<AppState> {
    Router::new().route("/version", get(get_version))
}

/// Service name, version and build.
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "meta",
    responses(
        (status = 200, description = "Service version", body = VersionResponse)
    )
)]
pub async fn get_version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse::from(state.app.as_ref()))
}
