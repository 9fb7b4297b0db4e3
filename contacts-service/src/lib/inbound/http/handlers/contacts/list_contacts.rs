use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::models::Page;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListContactsParams>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    let page = Page {
        skip: params.skip.unwrap_or(0).max(0),
        limit: params.limit.unwrap_or(100).clamp(1, 500),
    };

    state
        .contact_service
        .list_contacts(&user.id, page)
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
pub struct ListContactsParams {
    skip: Option<i64>,
    limit: Option<i64>,
}
