pub mod emailjs_delivery;
pub mod log_delivery;
pub mod smtp_delivery;

pub use emailjs_delivery::EmailJsDelivery;
pub use log_delivery::LogDelivery;
pub use smtp_delivery::SmtpDelivery;
