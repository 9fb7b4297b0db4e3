use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::super::bearer_token;
use super::super::ApiError;
use super::super::ApiSuccess;
use super::TokenResponseData;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Rotate a refresh credential into a new pair.
///
/// The refresh token travels as a bearer credential; a replayed or foreign
/// token fails here and has already revoked the stored session.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let token = bearer_token(&headers)?;

    let pair = state
        .auth_service
        .refresh(token)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, pair.into()))
}
