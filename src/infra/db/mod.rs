//! SQLite persistence (infrastructure).

pub mod database;
pub mod provider;

pub use database::{DATABASE_NAME, Database};
pub use provider::DatabaseProvider;
