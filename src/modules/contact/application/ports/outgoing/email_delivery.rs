use async_trait::async_trait;

use crate::modules::message::domain::entities::MessageDraft;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("email could not be built: {0}")]
    Compose(String),

    #[error("email provider failed: {0}")]
    Provider(String),
}

/// Sends a contact-form message to the site owner.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn deliver(&self, message: &MessageDraft) -> Result<(), DeliveryError>;
}
