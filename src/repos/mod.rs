pub mod account_repo;
pub mod booking_repo;
pub mod category_repo;
pub mod error;
pub mod payment_repo;
pub mod product_repo;
