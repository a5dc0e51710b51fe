use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::auth::jwt::{Claims, JwtManager};
use crate::error::AppError;

/// Nom du header custom transportant le token (compatibilité client existant,
/// pas le schéma Bearer).
pub const TOKEN_HEADER: &str = "token";

/// Extracteur d'authentification pour les routes protégées.
/// Lit le header `token`, vérifie le JWT via `JwtManager`, et expose le
/// username porté par la claim `sub`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    #[allow(dead_code)]
    pub iat: i64,
    #[allow(dead_code)]
    pub exp: i64,
}

impl From<Claims> for AuthUser {
    fn from(c: Claims) -> Self {
        Self {
            username: c.sub,
            iat: c.iat,
            exp: c.exp,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    JwtManager: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jwt_manager = JwtManager::from_ref(state);

        let header = parts
            .headers
            .get(TOKEN_HEADER)
            .ok_or_else(|| AppError::unauthorized("No token provided"))?;

        let token = header
            .to_str()
            .map_err(|_| AppError::unauthorized("Invalid token"))?;

        // Vérifie et décode le token
        let claims = jwt_manager
            .verify_token(token)
            .map_err(|_| AppError::unauthorized("Invalid token"))?;

        Ok(AuthUser::from(claims))
    }
}
