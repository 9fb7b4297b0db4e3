use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::get_contact::parse_contact_id;
use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let contact_id = parse_contact_id(&contact_id)?;

    state
        .contact_service
        .delete_contact(&user.id, &contact_id)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
