pub mod email_delivery;

pub use email_delivery::{DeliveryError, EmailDelivery};
