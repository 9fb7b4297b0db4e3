use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn upcoming_birthdays(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    state
        .contact_service
        .upcoming_birthdays(&user.id)
        .await
        .map_err(ApiError::from)
        .map(|contacts| {
            ApiSuccess::new(
                StatusCode::OK,
                contacts.iter().map(ContactData::from).collect(),
            )
        })
}
