pub mod account;
pub mod error;
pub mod response;
pub mod user;
