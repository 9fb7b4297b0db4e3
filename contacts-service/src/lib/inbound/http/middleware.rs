use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::bearer_token;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved principal through the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Principal-resolution middleware for protected routes.
///
/// Pure adapter: extracts the bearer credential, asks the auth service to
/// resolve it, and either attaches the principal or short-circuits with 401
/// before the handler runs. Rejections go through the same `ApiError`
/// envelope as handler errors.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(req.headers()).map_err(IntoResponse::into_response)?;

    let user = state
        .auth_service
        .resolve_principal(token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
