// src/modules/contact/application/services/contact_service.rs
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::modules::contact::application::ports::outgoing::EmailDelivery;
use crate::modules::content::application::services::SectionService;
use crate::modules::content::domain::Resource;
use crate::modules::message::domain::entities::{Message, MessageForm};
use crate::shared::forms::ValidationError;
use crate::shared::notice::Notice;

pub const SENT: &str = "Email sent successfully!";
pub const DELIVERY_FAILED: &str = "Failed to send email. Please try again later.";
pub const PERSIST_FAILED: &str = "Failed to save message to backend";

#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    Invalid(ValidationError),
    /// The email did not go out, so nothing was stored either.
    DeliveryFailed,
    /// The email went out. `persist_error` is set when storing the copy failed.
    Sent { persist_error: Option<String> },
}

impl ContactOutcome {
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            ContactOutcome::Invalid(e) => vec![Notice::error(e.to_string())],
            ContactOutcome::DeliveryFailed => vec![Notice::error(DELIVERY_FAILED)],
            ContactOutcome::Sent { persist_error: None } => vec![Notice::success(SENT)],
            ContactOutcome::Sent {
                persist_error: Some(message),
            } => vec![Notice::success(SENT), Notice::error(message.clone())],
        }
    }
}

#[derive(Clone)]
pub struct ContactService {
    delivery: Arc<dyn EmailDelivery>,
    messages: SectionService<Message>,
}

impl ContactService {
    pub fn new(delivery: Arc<dyn EmailDelivery>, messages: SectionService<Message>) -> Self {
        Self { delivery, messages }
    }

    /// Validates, emails, then stores. The two side effects are independent:
    /// a stored copy is only attempted after the email went out.
    pub async fn send(&self, form: MessageForm) -> ContactOutcome {
        let draft = match Message::validate(form) {
            Ok(draft) => draft,
            Err(e) => return ContactOutcome::Invalid(e),
        };

        if let Err(e) = self.delivery.deliver(&draft).await {
            error!("Contact email not delivered: {}", e);
            return ContactOutcome::DeliveryFailed;
        }
        info!("Contact email delivered");

        let persist_error = match self.messages.gateway().create(&draft, None).await {
            Ok(_) => None,
            Err(e) => {
                warn!("Contact message not stored: {}", e);
                Some(e.user_message(PERSIST_FAILED))
            }
        };

        ContactOutcome::Sent { persist_error }
    }
}
