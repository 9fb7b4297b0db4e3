use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::confirm_email;
use super::handlers::auth::login;
use super::handlers::auth::refresh_token;
use super::handlers::auth::request_email;
use super::handlers::auth::signup;
use super::handlers::contacts::create_contact;
use super::handlers::contacts::delete_contact;
use super::handlers::contacts::get_contact;
use super::handlers::contacts::list_contacts;
use super::handlers::contacts::search_contacts;
use super::handlers::contacts::upcoming_birthdays;
use super::handlers::contacts::update_contact;
use super::handlers::users::get_current_user;
use super::handlers::users::update_avatar;
use super::middleware::resolve_principal;
use crate::domain::contact::service::ContactService;
use crate::domain::user::service::AuthService;
use crate::outbound::mailer::TracingMailer;
use crate::outbound::repositories::contact::PostgresContactRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub contact_service: Arc<ContactService<PostgresContactRepository>>,
    pub mailer: Arc<TracingMailer>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    contact_service: Arc<ContactService<PostgresContactRepository>>,
    mailer: Arc<TracingMailer>,
) -> Router {
    let state = AppState {
        auth_service,
        contact_service,
        mailer,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh_token", get(refresh_token))
        .route("/api/auth/confirmed_email/:token", get(confirm_email))
        .route("/api/auth/request_email", post(request_email));

    // Every non-auth endpoint sits behind the principal-resolution guard.
    let protected_routes = Router::new()
        .route("/api/users/me", get(get_current_user))
        .route("/api/users/avatar", patch(update_avatar))
        .route("/api/contacts", get(list_contacts))
        .route("/api/contacts", post(create_contact))
        .route("/api/contacts/search", get(search_contacts))
        .route("/api/contacts/birthdays", get(upcoming_birthdays))
        .route("/api/contacts/:contact_id", get(get_contact))
        .route("/api/contacts/:contact_id", patch(update_contact))
        .route("/api/contacts/:contact_id", delete(delete_contact))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_principal,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
