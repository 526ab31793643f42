pub mod assets;
pub mod chrome;
pub mod document;
pub mod scroll_spy;
pub mod widgets;

pub use chrome::{Chrome, DashboardTab};
pub use document::Page;
