// src/shared/http/api_client.rs
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::credentials::Credentials;
use super::envelope::message_of;
use super::error::GatewayError;

/// Thin JSON client for the portfolio REST API.
///
/// No retries and no timeouts beyond reqwest's defaults: a failed call is
/// reported once and the user retries by hand.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

/// Successful reply: status, parsed body and any session cookies set.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: normalize_base(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| GatewayError::Network(format!("invalid endpoint {}: {}", path, e)))
    }

    pub async fn call(
        &self,
        method: Method,
        path: &str,
        credentials: Option<&Credentials>,
        payload: Option<Value>,
    ) -> Result<ApiReply, GatewayError> {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(credentials) = credentials {
            request = request.header(COOKIE, credentials.header_value());
        }

        if let Some(payload) = payload {
            let bytes = serde_json::to_vec(&payload)
                .map_err(|e| GatewayError::Decode(format!("could not encode request: {}", e)))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            GatewayError::Network(e.to_string())
        })?;

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let body = parse_body(&bytes);

        if !status.is_success() {
            warn!("{} {} responded {}", method, path, status.as_u16());
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message: message_of(&body).unwrap_or_default(),
            });
        }

        Ok(ApiReply {
            status: status.as_u16(),
            body,
            set_cookies,
        })
    }

    pub async fn get(&self, path: &str, credentials: Option<&Credentials>) -> Result<Value, GatewayError> {
        self.call(Method::GET, path, credentials, None)
            .await
            .map(|reply| reply.body)
    }

    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        credentials: Option<&Credentials>,
        payload: &B,
    ) -> Result<ApiReply, GatewayError> {
        let payload = serde_json::to_value(payload)
            .map_err(|e| GatewayError::Decode(format!("could not encode request: {}", e)))?;
        self.call(method, path, credentials, Some(payload)).await
    }

    pub async fn delete(&self, path: &str, credentials: Option<&Credentials>) -> Result<(), GatewayError> {
        self.call(Method::DELETE, path, credentials, None)
            .await
            .map(|_| ())
    }

    /// Reachability check used by the readiness probe. Any HTTP answer,
    /// even an error status, proves the API is up.
    pub async fn probe(&self) -> bool {
        match self.http.get(self.base.clone()).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("API probe failed: {}", e);
                false
            }
        }
    }
}

fn normalize_base(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

/// Empty bodies become `null`; non-JSON bodies are kept as a string.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
