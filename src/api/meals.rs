//! Meal endpoints - meal slots and their per-macro goals.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::meal::{self, MealInput},
    entities::meal::Model as MealModel,
    errors::Result,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

/// Registers the meal routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(list).post(add))
        .route("/:id", put(update).delete(remove))
}

async fn list(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<MealModel>>> {
    let meals = meal::list_meals(&state.db, user.id).await?;
    Ok(Json(meals))
}

async fn add(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<MealInput>,
) -> Result<Json<MealModel>> {
    let created = meal::create_meal(&state.db, user.id, input).await?;
    Ok(Json(created))
}

async fn update(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(input): Json<MealInput>,
) -> Result<Json<MealModel>> {
    let updated = meal::update_meal(&state.db, user.id, id, input).await?;
    Ok(Json(updated))
}

async fn remove(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<bool>> {
    meal::remove_meal(&state.db, user.id, id).await?;
    Ok(Json(true))
}
