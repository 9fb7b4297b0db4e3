use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::ConfirmationMailer;
use crate::inbound::http::handlers::users::UserData;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let username =
        Username::new(body.username).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let email =
        EmailAddress::new(body.email).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let user = state
        .auth_service
        .register(RegisterUserCommand::new(username, email, body.password))
        .await
        .map_err(ApiError::from)?;

    let token = state
        .auth_service
        .issue_confirmation_token(user.email.as_str())
        .await
        .map_err(ApiError::from)?;

    // Confirmation delivery is a background side effect of signup; a
    // delivery failure never fails the registration.
    let mailer = Arc::clone(&state.mailer);
    let recipient = user.email.as_str().to_string();
    let username = user.username.to_string();
    tokio::spawn(async move {
        if let Err(e) = mailer.send_confirmation(&recipient, &username, &token).await {
            tracing::error!("Failed to send confirmation email to {}: {}", recipient, e);
        }
    });

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SignupResponseData {
            user: (&user).into(),
            detail: "User successfully created. Check your email for confirmation.".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub user: UserData,
    pub detail: String,
}
