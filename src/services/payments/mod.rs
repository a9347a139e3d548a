pub mod gateway;
pub mod stripe;

pub use gateway::{PaymentError, PaymentGateway, to_minor_units};
pub use stripe::StripeGateway;
