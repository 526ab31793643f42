use async_trait::async_trait;

use crate::shared::http::Credentials;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The API answered and said no; the text is meant for the user.
    #[error("{0}")]
    Rejected(String),

    #[error("auth service unavailable: {0}")]
    Unavailable(String),

    #[error("login response carried no session cookie")]
    MissingSession,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges email and password for the API's session cookies.
    async fn login(&self, email: &str, password: &str) -> Result<Credentials, AuthError>;

    async fn logout(&self, credentials: &Credentials) -> Result<(), AuthError>;
}
