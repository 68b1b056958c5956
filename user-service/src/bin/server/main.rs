use std::sync::Arc;

use auth::Authenticator;
use auth::TokenConfig;
use sqlx::postgres::PgPoolOptions;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::config::StorageBackend;
use user_service::domain::authentication::ports::AuthServicePort;
use user_service::domain::authentication::service::AuthService;
use user_service::domain::user::ports::UserRepository;
use user_service::domain::user::ports::UserServicePort;
use user_service::domain::user::service::UserService;
use user_service::inbound::grpc::AuthGrpcService;
use user_service::inbound::grpc::UserGrpcService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::outbound::repositories::PostgresUserRepository;
use user_service::proto::auth_service_server::AuthServiceServer;
use user_service::proto::user_service_server::UserServiceServer;
use user_service::shutdown;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        backend = ?config.database.backend,
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        request_timeout_secs = config.server.request_timeout_secs,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    if config.jwt.secret.is_empty() {
        tracing::warn!("JWT secret is not configured; login and token validation will fail");
    }

    match config.database.backend {
        StorageBackend::Postgres => {
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

            run(config, Arc::new(PostgresUserRepository::new(pg_pool))).await
        }
        StorageBackend::Memory => {
            tracing::info!(database = "memory", "Using in-memory user repository");
            run(config, Arc::new(InMemoryUserRepository::new())).await
        }
    }
}

async fn run<UR: UserRepository>(config: Config, repository: Arc<UR>) -> Result<(), anyhow::Error> {
    let token_config = TokenConfig::new(
        config.jwt.secret.clone(),
        config.jwt.token_lifetime()?,
    );
    let authenticator = Arc::new(Authenticator::new(&token_config));

    let user_service: Arc<dyn UserServicePort> =
        Arc::new(UserService::new(Arc::clone(&repository)));
    let auth_service: Arc<dyn AuthServicePort> =
        Arc::new(AuthService::new(Arc::clone(&repository), authenticator));

    let (shutdown_trigger, shutdown) = shutdown::channel();
    tokio::spawn(shutdown_trigger.trigger_on_signal());

    let interval = config.monitoring.user_count_interval();
    let counted_service = Arc::clone(&user_service);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match counted_service.count_users().await {
                Ok(count) => tracing::info!(user_count = count, "Current user count"),
                Err(e) => tracing::error!(error = %e, "Failed to count users"),
            }
        }
    });

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        Arc::clone(&user_service),
        Arc::clone(&auth_service),
        config.server.request_timeout(),
    );
    let http_shutdown = shutdown.clone();
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(http_shutdown.recv())
            .await
    });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(config.server.request_timeout())
            .add_service(UserServiceServer::new(UserGrpcService::new(user_service)))
            .add_service(AuthServiceServer::new(AuthGrpcService::new(auth_service)))
            .serve_with_shutdown(grpc_address, shutdown.recv())
            .await
    });

    match tokio::try_join!(http_server, grpc_server) {
        Ok((http_result, grpc_result)) => {
            http_result?;
            grpc_result?;
            tracing::info!("Servers shut down gracefully");
        }
        Err(e) => tracing::error!(error = %e, "Server task failed"),
    };

    Ok(())
}
