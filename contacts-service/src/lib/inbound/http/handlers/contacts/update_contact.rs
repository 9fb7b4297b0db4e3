use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::get_contact::parse_contact_id;
use super::ContactData;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
    Json(body): Json<UpdateContactRequestBody>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let contact_id = parse_contact_id(&contact_id)?;

    let command = UpdateContactCommand {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        birthday: body.birthday,
        additional_data: body.additional_data,
    };

    state
        .contact_service
        .update_contact(&user.id, &contact_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateContactRequestBody {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    birthday: Option<NaiveDate>,
    additional_data: Option<String>,
}
