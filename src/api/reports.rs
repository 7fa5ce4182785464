//! Report endpoints - daily and weekly progress against meal goals.

use crate::{
    api::{ApiState, auth::CurrentUser},
    core::report::{self, DailyReport},
    errors::Result,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::NaiveDate;

/// Registers the report routes.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/daily/:date", get(daily))
        .route("/weekly/:date", get(weekly))
}

async fn daily(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DailyReport>> {
    let report = report::daily_report(&state.db, user.id, date).await?;
    Ok(Json(report))
}

/// Seven daily reports for the week containing the given date, Sunday first.
async fn weekly(
    State(state): State<ApiState>,
    Extension(user): Extension<CurrentUser>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<DailyReport>>> {
    let reports = report::weekly_report(&state.db, user.id, date).await?;
    Ok(Json(reports))
}
