// src/modules/message/domain/entities.rs
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Resource;
use crate::shared::forms::{require_all, trimmed, ValidationError};
use crate::shared::state::Record;

/// A message left through the contact form. Read and delete only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Message {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The public contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Resource for Message {
    type Draft = MessageDraft;
    type Form = MessageForm;

    const PATH: &'static str = "contact-messages";
    const LIST_KEYS: &'static [&'static str] = &["data", "messages"];
    const ITEM_KEYS: &'static [&'static str] = &["data", "message"];
    const LABEL: &'static str = "Message";
    const FETCH_FAILED: &'static str = "Failed to load messages";

    fn validate(form: MessageForm) -> Result<MessageDraft, ValidationError> {
        require_all(
            &[&form.name, &form.email, &form.message],
            "Name, email and message are required",
        )?;

        let email = trimmed(&form.email);
        if !EmailAddress::is_valid(&email) {
            return Err(ValidationError::Invalid(
                "Please enter a valid email address".to_string(),
            ));
        }

        Ok(MessageDraft {
            name: trimmed(&form.name),
            email,
            message: form.message.trim().to_string(),
        })
    }

    fn to_form(&self) -> MessageForm {
        MessageForm {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn from_draft(id: Option<i64>, draft: &MessageDraft) -> Self {
        Message {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            created_at: None,
        }
    }
}
