// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode};
use mechinsight_api::{LoginRequest, SignupRequest, TokenResponse};

use crate::app::AppState;
use crate::error::AppError;

/// POST /signup
/// Inscription d'un nouvel utilisateur
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let token = state.auth.signup(payload)?;
    Ok((StatusCode::OK, Json(token)))
}

/// POST /login
/// Connexion d'un utilisateur
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let token = state.auth.login(&payload)?;
    Ok((StatusCode::OK, Json(token)))
}
