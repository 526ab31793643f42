use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::outgoing::{DeliveryError, EmailDelivery};
use crate::modules::message::domain::entities::MessageDraft;

/// Development stand-in: the message only goes to the log.
pub struct LogDelivery;

#[async_trait]
impl EmailDelivery for LogDelivery {
    async fn deliver(&self, message: &MessageDraft) -> Result<(), DeliveryError> {
        info!(
            from = %message.email,
            name = %message.name,
            "Contact message (not emailed): {}",
            message.message
        );
        Ok(())
    }
}
