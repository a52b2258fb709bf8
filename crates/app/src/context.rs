//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{InMemoryProductsService, PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Explicitly constructed handles to the catalog store.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context backed by `PostgreSQL`.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating the database fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!("catalog store backed by postgres");

        Ok(Self {
            products: Arc::new(PgProductsService::new(Db::new(pool))),
        })
    }

    /// Build application context backed by a process-local store.
    #[must_use]
    pub fn in_memory() -> Self {
        info!("catalog store backed by memory; data is lost on restart");

        Self {
            products: Arc::new(InMemoryProductsService::new()),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
