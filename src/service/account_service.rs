use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::dto::user_dto::LoginResponse;
use crate::model::user::Registration;
use crate::repository::user_repo::UserRepository;
use crate::util::error::{messages, ServiceError};
use crate::util::password::{PasswordError, PasswordUtils, PasswordUtilsImpl};

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn register(&self, registration: Registration) -> Result<(), ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, ServiceError>;
}

pub struct AccountServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl AccountServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[instrument(skip(self, registration), fields(email = %registration.email, role = %registration.role))]
    async fn register(&self, registration: Registration) -> Result<(), ServiceError> {
        info!("Registering new user");

        // Advisory only: two concurrent registrations can both pass this check.
        // The unique index on `email` catches the loser at insert time.
        if self.user_repo.find_by_email(&registration.email).await?.is_some() {
            warn!("Registration rejected, email already registered");
            return Err(ServiceError::Conflict(messages::USER_EXISTS.to_string()));
        }

        let password = registration.password.clone();
        let hash = tokio::task::spawn_blocking(move || PasswordUtilsImpl::hash_password(&password))
            .await
            .map_err(|e| ServiceError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let inserted = self.user_repo.insert(registration.into_user(hash)).await;
        match &inserted {
            Ok(_) => info!("User registered successfully"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        inserted?;
        Ok(())
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, ServiceError> {
        info!("User login attempt");
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("User not found for login");
                ServiceError::NotFound(messages::USER_NOT_FOUND.to_string())
            })?;

        let stored_hash = user.password.clone();
        let verified = tokio::task::spawn_blocking(move || PasswordUtilsImpl::verify_password(&password, &stored_hash))
            .await
            .map_err(|e| ServiceError::Internal(format!("Password verification task failed: {}", e)))?;

        let valid = match verified {
            Ok(valid) => valid,
            // A stored value that is not a bcrypt hash can never match.
            Err(PasswordError::InvalidHashFormat) => false,
            Err(e) => return Err(ServiceError::Internal(e.to_string())),
        };
        if !valid {
            warn!("Invalid password for user");
            return Err(ServiceError::Auth(messages::INVALID_PASSWORD.to_string()));
        }

        info!("User logged in successfully");
        Ok(LoginResponse {
            message: messages::LOGIN_SUCCESS.to_string(),
            role: user.role,
            fullname: user.fullname,
        })
    }
}
