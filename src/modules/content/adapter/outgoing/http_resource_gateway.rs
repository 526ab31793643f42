// src/modules/content/adapter/outgoing/http_resource_gateway.rs
use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use crate::modules::content::application::ports::outgoing::ResourceGateway;
use crate::modules::content::domain::Resource;
use crate::shared::http::envelope::{decode_echo, decode_item, decode_list, ensure_acknowledged};
use crate::shared::http::{ApiClient, Credentials, GatewayError};

/// [`ResourceGateway`] over the portfolio REST API.
pub struct HttpResourceGateway<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResourceGateway<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", R::PATH, id)
    }
}

#[async_trait]
impl<R: Resource> ResourceGateway<R> for HttpResourceGateway<R> {
    async fn list(&self, credentials: Option<&Credentials>) -> Result<Vec<R>, GatewayError> {
        let body = self.api.get(R::PATH, credentials).await?;
        let items: Vec<R> = decode_list(body, R::LIST_KEYS)?;
        info!("Fetched {} {} records", items.len(), R::PATH);
        Ok(items)
    }

    async fn find(&self, id: i64, credentials: Option<&Credentials>) -> Result<R, GatewayError> {
        let body = self.api.get(&Self::item_path(id), credentials).await?;
        decode_item(body, R::ITEM_KEYS)
    }

    async fn create(
        &self,
        draft: &R::Draft,
        credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError> {
        let reply = self
            .api
            .send(Method::POST, R::PATH, credentials, draft)
            .await?;
        ensure_acknowledged(&reply.body, reply.status)?;
        info!("Created {} record", R::PATH);
        Ok(decode_echo(reply.body, R::ITEM_KEYS))
    }

    async fn update(
        &self,
        id: i64,
        draft: &R::Draft,
        credentials: Option<&Credentials>,
    ) -> Result<Option<R>, GatewayError> {
        let reply = self
            .api
            .send(Method::PUT, &Self::item_path(id), credentials, draft)
            .await?;
        ensure_acknowledged(&reply.body, reply.status)?;
        info!("Updated {} record {}", R::PATH, id);
        Ok(decode_echo(reply.body, R::ITEM_KEYS))
    }

    async fn delete(&self, id: i64, credentials: Option<&Credentials>) -> Result<(), GatewayError> {
        self.api.delete(&Self::item_path(id), credentials).await?;
        info!("Deleted {} record {}", R::PATH, id);
        Ok(())
    }
}
