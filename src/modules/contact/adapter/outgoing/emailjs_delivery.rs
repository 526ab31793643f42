use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, warn};

use crate::modules::contact::application::ports::outgoing::{DeliveryError, EmailDelivery};
use crate::modules::message::domain::entities::MessageDraft;

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Body of EmailJS' `email/send` REST call.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Sends contact messages through an EmailJS template.
pub struct EmailJsDelivery {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsDelivery {
    pub fn new(endpoint: &str, service_id: &str, template_id: &str, public_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        }
    }

    fn request_body(&self, message: &MessageDraft) -> Result<Vec<u8>, DeliveryError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                name: &message.name,
                email: &message.email,
                message: &message.message,
            },
        };
        serde_json::to_vec(&request).map_err(|e| DeliveryError::Compose(e.to_string()))
    }
}

#[async_trait]
impl EmailDelivery for EmailJsDelivery {
    async fn deliver(&self, message: &MessageDraft) -> Result<(), DeliveryError> {
        let body = self.request_body(message)?;
        debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Provider(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        warn!("EmailJS responded {}: {}", status.as_u16(), text);
        Err(DeliveryError::Provider(format!("{} {}", status.as_u16(), text)))
    }
}
