//! Server configuration module

use clap::Parser;

use crate::config::{
    cors::CorsConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request tracing settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin settings for the browser client.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_in_memory_store_on_port_4000() -> TestResult {
        let config = ServerConfig::try_parse_from(["catalog-json"])?;

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.socket_addr(), "0.0.0.0:4000");

        Ok(())
    }

    #[test]
    fn accepts_database_url_flag() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
            "--log-format",
            "json",
        ])?;

        assert_eq!(
            config.database.database_url.as_deref(),
            Some("postgres://localhost/catalog")
        );

        Ok(())
    }
}
