//! Folder endpoints.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::folder,
    entities::folder::Model as FolderModel,
    errors::Result,
};
use axum::{
    Extension, Json, Router,
    extract::State,
    routing::get,
};
use serde::Deserialize;

/// Registers the folder routes.
pub fn routes() -> Router<ApiState> {
    Router::new().route("/", get(list).post(create))
}

async fn list(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<FolderModel>>> {
    let folders = folder::list_folders(&state.db, user.id).await?;
    Ok(Json(folders))
}

#[derive(Debug, Deserialize)]
struct CreateFolderRequest {
    name: String,
}

async fn create(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<CreateFolderRequest>,
) -> Result<Json<i64>> {
    let created = folder::create_folder(&state.db, user.id, &request.name).await?;
    Ok(Json(created.id))
}
