use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::{ConfigurationError, RepositoryConfig, StorageMode};
use crate::in_memory::InMemoryTodoRepository;
use crate::postgres::PostgresTodoRepository;
use crate::repository::TodoRepository;

// =============================================================================
// RepositoryFactory
// =============================================================================

/// Builds the configured [`TodoRepository`].
///
/// ```ignore
/// let factory = RepositoryFactory::new(RepositoryConfig::from_env()?);
/// let repository = factory.create().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    config: RepositoryConfig,
}

impl RepositoryFactory {
    #[must_use]
    pub const fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Creates the repository, connecting to and preparing the database
    /// when `PostgreSQL` storage is selected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if:
    /// - the configuration fails validation
    /// - the database is unreachable or the schema cannot be created
    pub async fn create(&self) -> Result<Arc<dyn TodoRepository>, ConfigurationError> {
        self.config.validate()?;

        match self.config.storage_mode {
            StorageMode::InMemory => {
                tracing::info!("using in-memory todo storage");
                Ok(Arc::new(InMemoryTodoRepository::new()))
            }
            StorageMode::Postgres => {
                let repository = self.create_postgres_repository().await?;
                tracing::info!(
                    max_connections = self.config.max_connections,
                    "using PostgreSQL todo storage"
                );
                Ok(Arc::new(repository))
            }
        }
    }

    async fn create_postgres_repository(
        &self,
    ) -> Result<PostgresTodoRepository, ConfigurationError> {
        let database_url = self
            .config
            .database_url
            .as_ref()
            .ok_or(ConfigurationError::MissingDatabaseUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .connect(database_url)
            .await
            .map_err(|error| ConfigurationError::Connection(error.to_string()))?;

        let repository = PostgresTodoRepository::new(pool);
        repository
            .ensure_schema()
            .await
            .map_err(|error| ConfigurationError::Connection(error.to_string()))?;

        Ok(repository)
    }
}

// =============================================================================
// Tests
// =============================================================================
