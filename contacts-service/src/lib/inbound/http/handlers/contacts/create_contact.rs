use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<CreateContactRequestBody>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let command = CreateContactCommand {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        birthday: body.birthday,
        additional_data: body.additional_data,
    };

    state
        .contact_service
        .create_contact(&user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::CREATED, contact.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateContactRequestBody {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birthday: Option<NaiveDate>,
    additional_data: Option<String>,
}
