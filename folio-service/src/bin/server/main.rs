use std::sync::Arc;

use auth::Authenticator;
use folio_service::config::Config;
use folio_service::domain::blog::service::BlogService;
use folio_service::domain::project::service::ProjectService;
use folio_service::domain::user::service::UserService;
use folio_service::inbound::http::router::create_router;
use folio_service::outbound::images::CloudinaryImageStore;
use folio_service::outbound::repositories::PostgresBlogRepository;
use folio_service::outbound::repositories::PostgresProjectRepository;
use folio_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "folio-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        image_host = %config.image_host.upload_url,
        max_upload_bytes = config.image_host.max_upload_bytes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let blog_repository = Arc::new(PostgresBlogRepository::new(pg_pool.clone()));
    let project_repository = Arc::new(PostgresProjectRepository::new(pg_pool.clone()));
    let image_store = Arc::new(CloudinaryImageStore::new(&config.image_host));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        image_store,
        Arc::clone(&authenticator),
    ));
    let blog_service = Arc::new(BlogService::new(blog_repository, user_repository));
    let project_service = Arc::new(ProjectService::new(project_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        blog_service,
        project_service,
        authenticator,
        config.image_host.max_upload_bytes,
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Http server stopped, closing database pool");
    pg_pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
