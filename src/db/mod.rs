pub mod auth;
pub mod connection;
pub mod favorites;
pub mod leads;
pub mod listings;
pub mod magic_auth;
pub mod users;

pub use connection::{init_db, Database};
