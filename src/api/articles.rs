//! Article endpoints - metadata plus blob-stored content and images.
//!
//! The body document travels as plain JSON: the client PUTs the whole
//! document and GETs it back; the server owns the blob keys. Images are
//! uploaded as multipart form data and served back by their generated name.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::article,
    entities::article::Model as ArticleModel,
    errors::{Error, Result},
};
use axum::{
    Extension, Json, Router,
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

/// Registers the article routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id/content", get(get_content).put(update_content))
        .route("/:id/images", post(upload_image))
        .route("/:id/images/:name", get(get_image))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    folder: i64,
}

async fn list(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ArticleModel>>> {
    let articles = article::list_articles(&state.db, user.id, query.folder).await?;
    Ok(Json(articles))
}

#[derive(Debug, Deserialize)]
struct CreateArticleRequest {
    name: String,
    folder: i64,
}

async fn create(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Json<i64>> {
    let created =
        article::create_article(&state.db, user.id, request.folder, &request.name).await?;
    Ok(Json(created.id))
}

async fn get_content(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let content = article::get_content(&state.db, &state.blob, user.id, id).await?;
    Ok(Json(content.unwrap_or(serde_json::Value::Null)))
}

async fn update_content(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(content): Json<serde_json::Value>,
) -> Result<Json<bool>> {
    article::update_content(&state.db, &state.blob, user.id, id, &content).await?;
    Ok(Json(true))
}

#[derive(Debug, Serialize)]
struct UploadImageResponse {
    name: String,
}

async fn upload_image(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<UploadImageResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::validation(format!("Malformed upload: {e}")))?
    {
        let Some(content_type) = field.content_type().map(ToString::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::validation(format!("Malformed upload: {e}")))?;

        let name =
            article::save_image(&state.db, &state.blob, user.id, id, &content_type, &bytes)
                .await?;
        return Ok(Json(UploadImageResponse { name }));
    }

    Err(Error::validation("No file in upload"))
}

async fn get_image(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, name)): Path<(i64, String)>,
) -> Result<Response> {
    let (bytes, content_type) =
        article::load_image(&state.db, &state.blob, user.id, id, &name).await?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
