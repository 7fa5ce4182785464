//! Intake endpoints - logging foods against meals, day views, and
//! copying a day's records onto another day.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::intake::{self, IntakeInput, IntakeRecord},
    entities::meal_intake::Model as MealIntakeModel,
    errors::Result,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registers the intake routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/", post(add))
        .route("/day/:date", get(for_day))
        .route("/duplicate", post(duplicate))
        .route("/:id", put(update).delete(remove))
}

async fn for_day(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<IntakeRecord>>> {
    let records = intake::intake_for_day(&state.db, user.id, date).await?;
    Ok(Json(records))
}

async fn add(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<IntakeInput>,
) -> Result<Json<MealIntakeModel>> {
    let created = intake::add_intake(&state.db, user.id, input).await?;
    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
struct UpdateIntakeRequest {
    amount: f64,
}

async fn update(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateIntakeRequest>,
) -> Result<Json<MealIntakeModel>> {
    let updated = intake::update_intake(&state.db, user.id, id, request.amount).await?;
    Ok(Json(updated))
}

async fn remove(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<bool>> {
    intake::remove_intake(&state.db, user.id, id).await?;
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
struct DuplicateRequest {
    from_day: NaiveDate,
    to_day: NaiveDate,
}

#[derive(Debug, Serialize)]
struct DuplicateResponse {
    copied: u64,
}

async fn duplicate(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<DuplicateRequest>,
) -> Result<Json<DuplicateResponse>> {
    let copied =
        intake::duplicate_day(&state.db, user.id, request.from_day, request.to_day).await?;
    Ok(Json(DuplicateResponse { copied }))
}
