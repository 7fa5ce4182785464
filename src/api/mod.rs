//! HTTP API layer - route assembly, shared state, and error mapping.
//!
//! Routes are grouped by resource, mirroring the remote-procedure surface the
//! frontend consumes: each submodule owns one resource's queries and
//! mutations. Everything except `/health` and `/version` sits behind the
//! bearer-token middleware in [`auth`].

/// Article endpoints, including blob-stored content and images
pub mod articles;
/// Bearer-token authentication middleware
pub mod auth;
/// Folder endpoints
pub mod folders;
/// Food endpoints
pub mod food;
/// Intake logging endpoints
pub mod intake;
/// Meal endpoints
pub mod meals;
/// Daily and weekly report endpoints
pub mod reports;

use crate::{blob::FileStore, errors::Error};
use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Database connection for all database operations
    pub db: DatabaseConnection,
    /// Blob store for article content and images
    pub blob: Arc<FileStore>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. }
            | Self::InvalidAmount { .. }
            | Self::UnknownUnit { .. }
            | Self::UnsupportedContentType { .. }
            | Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::FoodNotFound { .. }
            | Self::MealNotFound { .. }
            | Self::IntakeNotFound { .. }
            | Self::FolderNotFound { .. }
            | Self::ArticleNotFound { .. }
            | Self::NothingToCopy { .. } => StatusCode::NOT_FOUND,
            Self::ContentUnavailable { .. }
            | Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::EnvVar(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Builds the complete router: public system endpoints plus the protected
/// resource routes behind the authentication middleware.
pub fn build_router(state: ApiState) -> Router {
    let protected = Router::new()
        .nest("/food", food::routes())
        .nest("/meals", meals::routes())
        .nest("/intake", intake::routes())
        .nest("/reports", reports::routes())
        .nest("/folders", folders::routes())
        .nest("/articles", articles::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_user,
        ))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .merge(protected)
        .layer(CorsLayer::permissive())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "nutri-buddy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
