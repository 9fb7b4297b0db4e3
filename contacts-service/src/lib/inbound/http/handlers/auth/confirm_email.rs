use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::errors::AuthError;
use crate::domain::user::models::ConfirmOutcome;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn confirm_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<ApiSuccess<ConfirmEmailResponseData>, ApiError> {
    let outcome = state
        .auth_service
        .confirm_email(&token)
        .await
        .map_err(|e| match e {
            // A token that cannot be decoded is a malformed request to this
            // route, not an authentication failure.
            AuthError::TokenExpired
            | AuthError::TokenMalformed(_)
            | AuthError::TokenScopeMismatch => {
                ApiError::UnprocessableEntity("Invalid token for email verification".to_string())
            }
            other => ApiError::from(other),
        })?;

    let message = match outcome {
        ConfirmOutcome::Confirmed => "Email confirmed",
        ConfirmOutcome::AlreadyConfirmed => "Your email is already confirmed",
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ConfirmEmailResponseData {
            message: message.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmEmailResponseData {
    pub message: String,
}
