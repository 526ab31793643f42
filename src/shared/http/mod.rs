pub mod api_client;
pub mod credentials;
pub mod envelope;
pub mod error;

pub use api_client::ApiClient;
pub use credentials::Credentials;
pub use error::GatewayError;
