//! Bearer-token authentication middleware.
//!
//! Extracts the token from `Authorization: Bearer <token>`, resolves it
//! against the users table, and provides [`CurrentUser`] to downstream
//! handlers. Runs before every protected handler; unknown tokens and
//! inactive accounts are rejected alike, so no handler ever sees an
//! unauthenticated request.

use crate::{
    api::ApiState,
    core::user,
    errors::{Error, Result},
};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// The authenticated caller, injected into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User id every query is scoped by
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Middleware that authenticates the request and stores [`CurrentUser`]
/// in the request extensions.
pub async fn require_user(
    State(state): State<ApiState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::Unauthorized)?;

    let account = user::find_by_token(&state.db, token)
        .await?
        .ok_or(Error::Unauthorized)?;

    if !account.is_active {
        return Err(Error::Unauthorized);
    }

    request.extensions_mut().insert(CurrentUser {
        id: account.id,
        name: account.name,
    });

    Ok(next.run(request).await)
}
