//! The public landing page: every section of the portfolio on one page.

pub mod adapter;
pub mod profile;
