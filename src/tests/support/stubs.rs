use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::health::UpstreamProbe;
use crate::modules::auth::application::ports::outgoing::{AuthError, AuthGateway};
use crate::modules::contact::application::ports::outgoing::{DeliveryError, EmailDelivery};
use crate::modules::content::application::ports::outgoing::ResourceGateway;
use crate::modules::content::domain::Resource;
use crate::modules::message::domain::entities::MessageDraft;
use crate::modules::overview::application::ports::outgoing::OverviewGateway;
use crate::modules::overview::domain::entities::Overview;
use crate::shared::http::envelope::decode_echo;
use crate::shared::http::{Credentials, GatewayError};
use crate::shared::state::Record;

/// What a write call hands back.
#[derive(Debug, Clone, PartialEq)]
enum EchoMode {
    /// The saved record, with its id.
    Saved,
    /// The saved record without an id.
    WithoutId,
    /// Nothing usable.
    Nothing,
    /// This response body, decoded the way the HTTP gateway decodes it.
    Body(Value),
}

/// In-memory collection standing in for one API resource.
pub struct StubGateway<R> {
    items: Mutex<Vec<R>>,
    fail: Mutex<Option<GatewayError>>,
    echo: Mutex<EchoMode>,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl<R: Resource> StubGateway<R> {
    pub fn with_items(items: Vec<R>) -> Arc<Self> {
        let next_id = items.iter().filter_map(|i| i.id()).max().unwrap_or(0) + 1;
        Arc::new(Self {
            items: Mutex::new(items),
            fail: Mutex::new(None),
            echo: Mutex::new(EchoMode::Saved),
            next_id: AtomicI64::new(next_id),
            list_calls: AtomicUsize::new(0),
            write_calls: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_items(Vec::new())
    }

    /// Every following call fails with `err`.
    pub fn fail_with(&self, err: GatewayError) {
        *self.fail.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
    }

    pub fn echo_without_id(&self) {
        *self.echo.lock().unwrap_or_else(PoisonError::into_inner) = EchoMode::WithoutId;
    }

    pub fn echo_nothing(&self) {
        *self.echo.lock().unwrap_or_else(PoisonError::into_inner) = EchoMode::Nothing;
    }

    pub fn echo_body(&self, body: Value) {
        *self.echo.lock().unwrap_or_else(PoisonError::into_inner) = EchoMode::Body(body);
    }

    pub fn items(&self) -> Vec<R> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), GatewayError> {
        match self.fail.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn echo(&self, saved: R, draft: &R::Draft) -> Option<R> {
        match &*self.echo.lock().unwrap_or_else(PoisonError::into_inner) {
            EchoMode::Saved => Some(saved),
            EchoMode::WithoutId => Some(R::from_draft(None, draft)),
            EchoMode::Nothing => None,
            EchoMode::Body(body) => decode_echo(body.clone(), R::ITEM_KEYS),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceGateway<R> for StubGateway<R> {
    async fn list(&self, _credentials: Option<&Credentials>) -> Result<Vec<R>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.items())
    }

    async fn find(&self, id: i64, _credentials: Option<&Credentials>) -> Result<R, GatewayError> {
        self.check()?;
        self.items()
            .into_iter()
            .find(|item| item.id() == Some(id))
            .ok_or(GatewayError::Status {
                status: 404,
                message: String::new(),
            })
    }

    async fn create(
        &self,
        draft: &R::Draft,
        _credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let saved = R::from_draft(Some(id), draft);
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(0, saved.clone());
        Ok(self.echo(saved, draft))
    }

    async fn update(
        &self,
        id: i64,
        draft: &R::Draft,
        _credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let saved = R::from_draft(Some(id), draft);
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        match items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(slot) => *slot = saved.clone(),
            None => items.insert(0, saved.clone()),
        }
        drop(items);
        Ok(self.echo(saved, draft))
    }

    async fn delete(&self, id: i64, _credentials: Option<&Credentials>) -> Result<(), GatewayError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|item| item.id() != Some(id));
        Ok(())
    }
}

/// Rejects every login; logout always succeeds.
pub struct StubAuthGateway;

#[async_trait]
impl AuthGateway for StubAuthGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<Credentials, AuthError> {
        Err(AuthError::Rejected("Invalid email or password".to_string()))
    }

    async fn logout(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        Ok(())
    }
}

pub struct StubOverviewGateway;

#[async_trait]
impl OverviewGateway for StubOverviewGateway {
    async fn fetch(&self, _credentials: &Credentials) -> Result<Overview, GatewayError> {
        Ok(Overview::default())
    }
}

pub struct StubUpstream(pub bool);

#[async_trait]
impl UpstreamProbe for StubUpstream {
    async fn reachable(&self) -> bool {
        self.0
    }
}

/// Keeps every delivered message; optionally fails instead.
pub struct RecordingDelivery {
    delivered: Mutex<Vec<MessageDraft>>,
    fail: bool,
}

impl RecordingDelivery {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn delivered(&self) -> Vec<MessageDraft> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn deliver(&self, message: &MessageDraft) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Provider("stub provider down".to_string()));
        }
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }
}
