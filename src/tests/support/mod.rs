pub mod app_state_builder;
pub mod fixtures;
pub mod session_helper;
pub mod stubs;
