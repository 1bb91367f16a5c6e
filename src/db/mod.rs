pub mod account;
pub mod memory;
pub mod postgres_service;
pub mod store;

pub use memory::MemoryStore;
pub use postgres_service::PostgresService;
pub use store::{AccountStore, StoreError};
