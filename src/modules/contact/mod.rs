//! Public contact form: email the owner, then keep a copy as a message.

pub mod adapter;
pub mod application;
