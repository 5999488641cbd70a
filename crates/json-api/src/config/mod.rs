//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use allot_app::context::AppConfig;

use crate::config::{logging::LoggingConfig, server::ServerRuntimeConfig, storage::StorageConfig};

pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod storage;

pub(crate) use logging::LogFormat;

/// Allot JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "allot-json", about = "Allot JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Export, upload and budget settings.
    #[command(flatten)]
    pub storage: StorageConfig,
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

    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }

    /// Settings for the application services.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            export_dir: self.storage.export_dir.clone(),
            default_budget: self.storage.default_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_documented_values() -> TestResult {
        let config = ServerConfig::try_parse_from(["allot-json"])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.storage.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.storage.export_dir.to_str(), Some("exports"));
        assert!(config.storage.default_budget.amount().abs() <= f64::EPSILON);

        Ok(())
    }

    #[test]
    fn host_must_be_an_ip_address() {
        let result = ServerConfig::try_parse_from(["allot-json", "--host", "localhost"]);

        assert!(result.is_err(), "expected a parse error, got {result:?}");
    }

    #[test]
    fn negative_default_budget_is_rejected() {
        let result = ServerConfig::try_parse_from(["allot-json", "--default-budget=-5"]);

        assert!(result.is_err(), "expected a parse error, got {result:?}");
    }
}
