use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{AuthError, AuthGateway};
use crate::modules::auth::application::services::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    /// The API refused; the local session is gone regardless.
    #[error("{0}")]
    Rejected(String),

    #[error("Something went wrong!")]
    Unavailable,
}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError>;
}

pub struct LogoutAdminUseCase {
    gateway: Arc<dyn AuthGateway>,
    sessions: SessionStore,
}

impl LogoutAdminUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>, sessions: SessionStore) -> Self {
        Self { gateway, sessions }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    /// Closes the local session first, then tells the API.
    async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError> {
        let Some(session) = self.sessions.close(session_id) else {
            return Ok(());
        };
        info!(session = %session_id, "Admin session closed");

        match self.gateway.logout(&session.credentials).await {
            Ok(()) => Ok(()),
            Err(AuthError::Rejected(message)) => {
                warn!("Upstream logout rejected: {}", message);
                let message = if message.trim().is_empty() {
                    "Logout failed!".to_string()
                } else {
                    message
                };
                Err(LogoutError::Rejected(message))
            }
            Err(e) => {
                warn!("Upstream logout failed: {}", e);
                Err(LogoutError::Unavailable)
            }
        }
    }
}
