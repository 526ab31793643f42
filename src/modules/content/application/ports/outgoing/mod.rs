pub mod resource_gateway;

pub use resource_gateway::ResourceGateway;
