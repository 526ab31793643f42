use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::auth::application::ports::outgoing::{AuthError, AuthGateway};
use crate::modules::auth::application::services::{AdminSession, SessionStore};

// ========================= Login Request =========================
/// Email and password, both known to be non-blank.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Please enter both email and password")]
    MissingFields,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(LoginRequestError::MissingFields);
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error =========================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),

    #[error("Login failed. Please try again later.")]
    Unavailable,
}

// ========================= Use Case =========================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<Arc<AdminSession>, LoginError>;
}

pub struct LoginAdminUseCase {
    gateway: Arc<dyn AuthGateway>,
    sessions: SessionStore,
}

impl LoginAdminUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, sessions: SessionStore) -> Self {
        Self { gateway, sessions }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<Arc<AdminSession>, LoginError> {
        match self.gateway.login(request.email(), request.password()).await {
            Ok(credentials) => {
                info!("Admin login accepted");
                Ok(self.sessions.open(request.email(), credentials))
            }
            Err(AuthError::Rejected(message)) => {
                warn!("Admin login rejected: {}", message);
                Err(LoginError::Rejected(message))
            }
            Err(e) => {
                warn!("Admin login failed: {}", e);
                Err(LoginError::Unavailable)
            }
        }
    }
}
