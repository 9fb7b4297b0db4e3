use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::CurrentUser;

pub async fn get_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
