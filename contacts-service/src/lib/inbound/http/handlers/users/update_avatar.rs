use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_avatar(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<UpdateAvatarRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let updated = state
        .auth_service
        .update_avatar(user.email.as_str(), &body.avatar)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, (&updated).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAvatarRequestBody {
    avatar: String,
}
