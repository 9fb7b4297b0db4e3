use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::ConfirmationMailer;
use crate::inbound::http::router::AppState;

/// Re-send the confirmation email.
///
/// The response for an unknown email is identical to the one for a known,
/// unconfirmed account; this route never confirms account existence.
pub async fn request_email(
    State(state): State<AppState>,
    Json(body): Json<RequestEmailBody>,
) -> Result<ApiSuccess<RequestEmailResponseData>, ApiError> {
    let user = state
        .auth_service
        .get_by_email(&body.email)
        .await
        .map_err(ApiError::from)?;

    let message = match user {
        Some(user) if user.confirmed => "Your email is already confirmed",
        Some(user) => {
            let token = state
                .auth_service
                .issue_confirmation_token(user.email.as_str())
                .await
                .map_err(ApiError::from)?;

            let mailer = Arc::clone(&state.mailer);
            let recipient = user.email.as_str().to_string();
            let username = user.username.to_string();
            tokio::spawn(async move {
                if let Err(e) = mailer.send_confirmation(&recipient, &username, &token).await {
                    tracing::error!("Failed to send confirmation email to {}: {}", recipient, e);
                }
            });

            "Check your email for confirmation."
        }
        None => "Check your email for confirmation.",
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RequestEmailResponseData {
            message: message.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestEmailBody {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestEmailResponseData {
    pub message: String,
}
