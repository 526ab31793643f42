pub mod api;
pub mod forms;
pub mod http;
pub mod notice;
pub mod state;
pub mod view;
