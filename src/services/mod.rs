pub mod auth;
pub mod payments;
