use std::sync::Arc;

use anyhow::Error;
use chrono::Duration;
use contacts_service::config::Config;
use contacts_service::domain::contact::service::ContactService;
use contacts_service::domain::user::service::AuthService;
use contacts_service::domain::user::service::TokenTtls;
use contacts_service::inbound::http::router::create_router;
use contacts_service::outbound::mailer::TracingMailer;
use contacts_service::outbound::repositories::contact::PostgresContactRepository;
use contacts_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "contacts-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_days = config.jwt.refresh_ttl_days,
        confirmation_ttl_hours = config.jwt.confirmation_ttl_hours,
        mail_base_url = %config.mail.base_url,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let ttls = TokenTtls {
        access: Duration::minutes(config.jwt.access_ttl_minutes),
        refresh: Duration::days(config.jwt.refresh_ttl_days),
        confirmation: Duration::hours(config.jwt.confirmation_ttl_hours),
    };

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let contact_repository = Arc::new(PostgresContactRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.jwt.secret.as_bytes(),
        ttls,
    ));
    let contact_service = Arc::new(ContactService::new(contact_repository));
    let mailer = Arc::new(TracingMailer::new(config.mail.base_url.clone()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        "Server Listening"
    );

    let application = create_router(auth_service, contact_service, mailer);

    axum::serve(listener, application).await?;

    Ok(())
}
