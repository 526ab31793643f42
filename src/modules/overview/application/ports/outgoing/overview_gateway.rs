use async_trait::async_trait;

use crate::modules::overview::domain::entities::Overview;
use crate::shared::http::{Credentials, GatewayError};

#[async_trait]
pub trait OverviewGateway: Send + Sync {
    async fn fetch(&self, credentials: &Credentials) -> Result<Overview, GatewayError>;
}
