pub mod overview_gateway;

pub use overview_gateway::OverviewGateway;
