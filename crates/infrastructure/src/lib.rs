//! Persistence for todo records.
//!
//! [`TodoRepository`] is the single port the HTTP layer talks to. Two adapters
//! implement it: [`InMemoryTodoRepository`] for development and tests, and
//! [`PostgresTodoRepository`] backed by `sqlx`. [`RepositoryFactory`] picks one
//! from [`RepositoryConfig`] at startup.

pub mod config;
pub mod errors;
pub mod factory;
pub mod in_memory;
pub mod postgres;
pub mod repository;

pub use config::{ConfigurationError, RepositoryConfig, StorageMode};
pub use errors::RepositoryError;
pub use factory::RepositoryFactory;
pub use in_memory::InMemoryTodoRepository;
pub use postgres::PostgresTodoRepository;
pub use repository::TodoRepository;
