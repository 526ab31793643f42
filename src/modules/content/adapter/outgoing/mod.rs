pub mod http_resource_gateway;

pub use http_resource_gateway::HttpResourceGateway;
