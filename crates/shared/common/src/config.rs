//! Shared configuration structures.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,
    /// Port to listen on
    #[validate(range(min = 1, message = "port must be non-zero"))]
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Socket address string in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing filter directive; verbose mode forces `debug`.
    pub fn filter_directive(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "password-analyser".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}
