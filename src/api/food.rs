//! Food endpoints - the catalogue of foods and their nutrient content.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::food::{self, FoodInput},
    entities::food::Model as FoodModel,
    errors::Result,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

/// Registers the food routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(list).post(add))
        .route("/:id", put(update).delete(remove))
}

async fn list(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<FoodModel>>> {
    let foods = food::list_foods(&state.db, user.id).await?;
    Ok(Json(foods))
}

async fn add(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<FoodInput>,
) -> Result<Json<FoodModel>> {
    let created = food::create_food(&state.db, user.id, input).await?;
    Ok(Json(created))
}

async fn update(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(input): Json<FoodInput>,
) -> Result<Json<FoodModel>> {
    let updated = food::update_food(&state.db, user.id, id, input).await?;
    Ok(Json(updated))
}

async fn remove(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<bool>> {
    food::remove_food(&state.db, user.id, id).await?;
    Ok(Json(true))
}
