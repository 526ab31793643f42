// src/modules/content/application/services/section_service.rs
use std::sync::Arc;

use tracing::{error, warn};

use crate::modules::content::application::ports::outgoing::ResourceGateway;
use crate::modules::content::domain::Resource;
use crate::shared::forms::ValidationError;
use crate::shared::http::Credentials;
use crate::shared::notice::Notice;
use crate::shared::state::SectionList;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// Rejected locally; the API was never called.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("{0}")]
    Upstream(String),
}

impl SaveError {
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

/// Load, save and delete for one section, applied to a [`SectionList`].
pub struct SectionService<R: Resource> {
    gateway: Arc<dyn ResourceGateway<R>>,
}

impl<R: Resource> Clone for SectionService<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<R: Resource> SectionService<R> {
    pub fn new(gateway: Arc<dyn ResourceGateway<R>>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<dyn ResourceGateway<R>> {
        &self.gateway
    }

    /// Replaces the list with a fresh fetch. A failure empties the list and
    /// comes back as an error notice.
    pub async fn load(
        &self,
        list: &mut SectionList<R>,
        credentials: Option<&Credentials>,
    ) -> Option<Notice> {
        match self.gateway.list(credentials).await {
            Ok(items) => {
                list.replace_all(items);
                None
            }
            Err(e) => {
                error!("Fetching {} failed: {}", R::PATH, e);
                let message = e.user_message(R::FETCH_FAILED);
                list.fail(message.clone());
                Some(Notice::error(message))
            }
        }
    }

    /// Fetch for a page that keeps no state between requests.
    pub async fn fetch(&self, credentials: Option<&Credentials>) -> (SectionList<R>, Option<Notice>) {
        let mut list = SectionList::new();
        let notice = self.load(&mut list, credentials).await;
        (list, notice)
    }

    /// Fetches only when the cached list is stale, or when `refresh` asks for it.
    pub async fn ensure_loaded(
        &self,
        list: &mut SectionList<R>,
        credentials: Option<&Credentials>,
        refresh: bool,
    ) -> Option<Notice> {
        if refresh {
            list.invalidate();
        }
        if list.needs_fetch() {
            self.load(list, credentials).await
        } else {
            None
        }
    }

    /// Validates the form, then creates (`id` absent) or updates the record
    /// and merges the result into `list`.
    pub async fn submit(
        &self,
        list: &mut SectionList<R>,
        id: Option<i64>,
        form: R::Form,
        credentials: Option<&Credentials>,
    ) -> Result<Notice, SaveError> {
        let draft = R::validate(form)?;

        let (result, verb) = match id {
            None => (self.gateway.create(&draft, credentials).await, "created"),
            Some(id) => (self.gateway.update(id, &draft, credentials).await, "updated"),
        };

        let echoed = result.map_err(|e| {
            error!("Saving {} failed: {}", R::PATH, e);
            let action = if id.is_some() { "update" } else { "create" };
            SaveError::Upstream(e.user_message(&format!("Failed to {} {}", action, R::label_lower())))
        })?;

        // An update echo must describe the record that was updated.
        let saved = match echoed {
            Some(item) if id.is_none() || item.id() == id => item,
            _ => R::from_draft(id, &draft),
        };

        let key = list.upsert(saved);
        if key.is_temporary() {
            warn!(
                "{} saved without a server id; listed under {} until the next refresh",
                R::LABEL,
                key
            );
        }

        Ok(Notice::success(format!("{} {} successfully", R::LABEL, verb)))
    }

    pub async fn remove(
        &self,
        list: &mut SectionList<R>,
        id: i64,
        credentials: Option<&Credentials>,
    ) -> Result<Notice, Notice> {
        match self.gateway.delete(id, credentials).await {
            Ok(()) => {
                list.remove(id);
                Ok(Notice::success(format!("{} deleted successfully", R::LABEL)))
            }
            Err(e) => {
                error!("Deleting {} {} failed: {}", R::PATH, id, e);
                Err(Notice::error(
                    e.user_message(&format!("Failed to delete {}", R::label_lower())),
                ))
            }
        }
    }
}
