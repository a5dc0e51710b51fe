mod app;
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod machines;

use app::{AppState, build_router, cors_layer};
use auth::jwt::JwtManager;
use config::Config;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub async fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new("info,mechinsight=debug,hyper_util=warn,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging().await;
    tracing::info!("Starting mechinsight...");

    let config = Config::from_env()?;

    let pool = db::connection::create_pool(&config.database_url)?;
    tracing::info!("PostgreSQL pool ready");

    let jwt_manager = JwtManager::new(&config.secret_key, config.jwt_expiration_hours);
    let state = AppState::new(jwt_manager, pool);

    let app = build_router(state)
        .layer(cors_layer(&config.frontend_url)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
