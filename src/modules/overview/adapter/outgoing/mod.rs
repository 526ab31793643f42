pub mod http_overview_gateway;

pub use http_overview_gateway::HttpOverviewGateway;
