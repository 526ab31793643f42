// src/modules/content/application/ports/outgoing/resource_gateway.rs
use async_trait::async_trait;

use crate::modules::content::domain::Resource;
use crate::shared::http::{Credentials, GatewayError};

/// CRUD access to one remote collection.
///
/// Write calls return `Ok(None)` when the server accepted the change but did
/// not echo a usable record back.
#[async_trait]
pub trait ResourceGateway<R: Resource>: Send + Sync {
    async fn list(&self, credentials: Option<&Credentials>) -> Result<Vec<R>, GatewayError>;

    async fn find(&self, id: i64, credentials: Option<&Credentials>) -> Result<R, GatewayError>;

    async fn create(
        &self,
        draft: &R::Draft,
        credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError>;

    async fn update(
        &self,
        id: i64,
        draft: &R::Draft,
        credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError>;

    async fn delete(&self, id: i64, credentials: Option<&Credentials>) -> Result<(), GatewayError>;
}
