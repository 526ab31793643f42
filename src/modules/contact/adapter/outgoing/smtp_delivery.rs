use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message as Email, Tokio1Executor};

use crate::modules::contact::application::ports::outgoing::{DeliveryError, EmailDelivery};
use crate::modules::message::domain::entities::MessageDraft;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Email) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Relays contact messages to the owner's inbox over SMTP.
pub struct SmtpDelivery {
    mailer: Box<dyn Mailer>,
    from_email: String,
    to_email: String,
}

impl SmtpDelivery {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, to_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            to_email: to_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        to_email: &str,
    ) -> Result<Self, DeliveryError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| DeliveryError::Provider(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email, to_email))
    }

    fn compose(&self, message: &MessageDraft) -> Result<Email, DeliveryError> {
        let parse = |raw: &str| -> Result<Mailbox, DeliveryError> {
            raw.parse::<Mailbox>()
                .map_err(|e| DeliveryError::Compose(format!("{:?}", e)))
        };

        Email::builder()
            .from(parse(&self.from_email)?)
            .reply_to(parse(&message.email)?)
            .to(parse(&self.to_email)?)
            .subject(format!("Portfolio contact from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\n\n{}",
                message.name, message.email, message.message
            ))
            .map_err(|e| DeliveryError::Compose(e.to_string()))
    }
}

#[async_trait]
impl EmailDelivery for SmtpDelivery {
    async fn deliver(&self, message: &MessageDraft) -> Result<(), DeliveryError> {
        let email = self.compose(message)?;
        self.mailer.send(email).await.map_err(DeliveryError::Provider)
    }
}
