pub mod bookings;
pub mod categories;
pub mod payments;
pub mod products;
pub mod token;
pub mod users;
