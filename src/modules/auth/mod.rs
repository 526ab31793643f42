//! Admin login against the portfolio API and the local sessions that carry
//! its credentials.

pub mod adapter;
pub mod application;
