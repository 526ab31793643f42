//! Dashboard landing page: record counts across the whole site.

pub mod adapter;
pub mod application;
pub mod domain;
