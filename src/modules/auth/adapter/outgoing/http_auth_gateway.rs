// src/modules/auth/adapter/outgoing/http_auth_gateway.rs
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::info;

use crate::modules::auth::application::ports::outgoing::{AuthError, AuthGateway};
use crate::shared::http::envelope::ensure_acknowledged;
use crate::shared::http::{ApiClient, Credentials, GatewayError};

const LOGIN_PATH: &str = "auth/login";
const LOGOUT_PATH: &str = "auth/logout";
const LOGIN_REJECTED: &str = "Invalid email or password";

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Status answers are the API speaking to the user; anything else means it
/// could not be reached or understood.
fn classify(err: GatewayError, fallback: &str) -> AuthError {
    match err {
        GatewayError::Status { .. } => AuthError::Rejected(err.user_message(fallback)),
        other => AuthError::Unavailable(other.to_string()),
    }
}

pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<Credentials, AuthError> {
        let reply = self
            .api
            .send(Method::POST, LOGIN_PATH, None, &LoginBody { email, password })
            .await
            .map_err(|e| classify(e, LOGIN_REJECTED))?;
        ensure_acknowledged(&reply.body, reply.status).map_err(|e| classify(e, LOGIN_REJECTED))?;

        let credentials =
            Credentials::from_set_cookie(&reply.set_cookies).ok_or(AuthError::MissingSession)?;
        info!("Login accepted by API");
        Ok(credentials)
    }

    async fn logout(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let reply = self
            .api
            .call(Method::POST, LOGOUT_PATH, Some(credentials), None)
            .await
            .map_err(|e| classify(e, ""))?;
        ensure_acknowledged(&reply.body, reply.status).map_err(|e| classify(e, ""))?;
        Ok(())
    }
}
