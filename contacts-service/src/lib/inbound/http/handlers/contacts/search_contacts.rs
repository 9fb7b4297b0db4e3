use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn search_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<SearchContactsParams>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    state
        .contact_service
        .search_contacts(&user.id, &params.q)
        .await
        .map_err(ApiError::from)
        .map(|contacts| {
            ApiSuccess::new(
                StatusCode::OK,
                contacts.iter().map(ContactData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchContactsParams {
    q: String,
}
