// src/modules/auth/application/services/session_store.rs
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::content::application::dashboard::Dashboard;
use crate::shared::http::Credentials;

/// A logged-in admin: the upstream credentials plus the dashboard lists
/// loaded during this session.
#[derive(Debug)]
pub struct AdminSession {
    pub id: Uuid,
    pub email: String,
    pub credentials: Credentials,
    pub dashboard: Mutex<Dashboard>,
    opened_at: Instant,
}

impl AdminSession {
    fn new(email: String, credentials: Credentials) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            credentials,
            dashboard: Mutex::new(Dashboard::default()),
            opened_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.opened_at.elapsed() >= ttl
    }
}

/// In-memory admin sessions keyed by the id held in the browser cookie.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<AdminSession>>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn open(&self, email: impl Into<String>, credentials: Credentials) -> Arc<AdminSession> {
        self.purge_expired();

        let session = Arc::new(AdminSession::new(email.into(), credentials));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id, Arc::clone(&session));

        info!(session = %session.id, "Admin session opened");
        session
    }

    /// The live session for `id`. An expired one is dropped on the way.
    pub fn get(&self, id: Uuid) -> Option<Arc<AdminSession>> {
        let session = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()?;

        if session.is_expired(self.ttl) {
            debug!(session = %id, "Admin session expired");
            self.close(id);
            return None;
        }
        Some(session)
    }

    pub fn close(&self, id: Uuid) -> Option<Arc<AdminSession>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
    }

    /// Drops every expired session; returns how many went.
    pub fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.ttl));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
