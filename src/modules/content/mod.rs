//! Generic list-and-mutate machinery shared by every dashboard section.

pub mod adapter;
pub mod application;
pub mod domain;
