//! Storage infrastructure - connection pooling, schema and backend selection

mod factory;
mod postgres;
mod schema;

pub use factory::{Repositories, StorageFactory, StorageType};
pub use postgres::{connect, PostgresConfig};
pub use schema::ensure_schema;
