pub mod dashboard_routes;
pub mod views;
