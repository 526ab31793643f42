pub mod auth;
pub mod blog;
pub mod contact;
pub mod content;
pub mod experience;
pub mod home;
pub mod message;
pub mod overview;
pub mod project;
pub mod skill;
