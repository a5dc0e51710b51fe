// src/auth/services.rs

use crate::auth::jwt::JwtManager;
use crate::auth::password::PasswordManager;
use crate::db::DbPool;
use crate::db::models::user::NewUser;
use crate::db::repositories::user_repository::UserRepository;
use crate::error::AppError;
use mechinsight_api::{LoginRequest, SignupRequest, TokenResponse};

pub struct AuthService {
    jwt_manager: JwtManager,
    users: UserRepository,
}

impl AuthService {
    pub fn new(jwt_manager: JwtManager, pool: DbPool) -> Self {
        Self {
            jwt_manager,
            users: UserRepository::new(pool),
        }
    }

    /// Inscription d'un nouvel utilisateur.
    ///
    /// Validation first (all field errors reported at once), then the
    /// duplicate checks, then the insert with a bcrypt hash. Success answers
    /// with a fresh token, like the login path.
    pub fn signup(&self, request: SignupRequest) -> Result<TokenResponse, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if self.users.find_by_email(&request.email)?.is_some() {
            return Err(AppError::duplicate("Email Id already exists"));
        }
        if self.users.find_by_username(&request.username)?.is_some() {
            return Err(AppError::duplicate("Username already exists"));
        }

        let password_hash = PasswordManager::hash(&request.password)?;

        let new_user = NewUser {
            firstname: request.firstname,
            lastname: request.lastname,
            username: request.username,
            email: request.email,
            password_hash,
        };

        let user = self.users.create(&new_user)?;
        tracing::info!(username = %user.username, "New user signed up");

        let token = self.jwt_manager.generate_access_token(&user.username)?;
        Ok(TokenResponse { token })
    }

    /// Connexion d'un utilisateur.
    ///
    /// Unknown username and wrong password both answer 400 with distinct
    /// messages (the contract the existing frontend relies on).
    pub fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(AppError::invalid_credentials("Invalid Input"));
        }

        let user = self
            .users
            .find_by_username(&request.username)?
            .ok_or_else(|| AppError::invalid_credentials("Invalid username"))?;

        if !PasswordManager::verify(&request.password, &user.password_hash)? {
            return Err(AppError::invalid_credentials("Wrong Password"));
        }

        tracing::info!(username = %user.username, "User logged in");

        let token = self.jwt_manager.generate_access_token(&user.username)?;
        Ok(TokenResponse { token })
    }
}
