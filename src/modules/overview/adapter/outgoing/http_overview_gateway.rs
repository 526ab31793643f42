use async_trait::async_trait;

use crate::modules::overview::application::ports::outgoing::OverviewGateway;
use crate::modules::overview::domain::entities::Overview;
use crate::shared::http::envelope::{decode_item, ensure_acknowledged};
use crate::shared::http::{ApiClient, Credentials, GatewayError};

pub struct HttpOverviewGateway {
    api: ApiClient,
}

impl HttpOverviewGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OverviewGateway for HttpOverviewGateway {
    async fn fetch(&self, credentials: &Credentials) -> Result<Overview, GatewayError> {
        let body = self.api.get("overview", Some(credentials)).await?;
        ensure_acknowledged(&body, 200)?;
        decode_item(body, &["data"])
    }
}
