// src/app.rs

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::FromRef,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::auth::extractors::TOKEN_HEADER;
use crate::auth::jwt::JwtManager;
use crate::auth::services::AuthService;
use crate::db::DbPool;
use crate::handlers::auth::{login, signup};
use crate::handlers::health::{health, root};
use crate::handlers::machine::{machine_detail_by_id, machine_details};
use crate::machines::services::MachineService;

/// État partagé de l'application: le codec JWT et les services, construits
/// une fois dans `main` autour du pool injecté.
#[derive(Clone)]
pub struct AppState {
    pub jwt_manager: JwtManager,
    pub auth: Arc<AuthService>,
    pub machines: Arc<MachineService>,
}

impl AppState {
    pub fn new(jwt_manager: JwtManager, pool: DbPool) -> Self {
        Self {
            auth: Arc::new(AuthService::new(jwt_manager.clone(), pool.clone())),
            machines: Arc::new(MachineService::new(pool)),
            jwt_manager,
        }
    }
}

// Permet à l'extracteur AuthUser de récupérer le JwtManager depuis le state
impl FromRef<AppState> for JwtManager {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_manager.clone()
    }
}

/// Construit l'application complète
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/machine_details", post(machine_details))
        .route("/machine_details/{machine_id}", get(machine_detail_by_id))
        .with_state(state)
}

/// CORS pour le frontend configuré (le header custom `token` doit être
/// explicitement autorisé).
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = frontend_url
        .parse()
        .context("FRONTEND_URL is not a valid origin")?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(TOKEN_HEADER),
        ])
        .allow_credentials(true))
}
