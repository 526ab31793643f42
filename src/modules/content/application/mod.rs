pub mod dashboard;
pub mod ports;
pub mod services;
