//! Analyser site configuration.

use std::env;
use std::path::PathBuf;

use common::{AppResult, ServiceConfig};
use domain::GuardBinding;
use validator::Validate;

/// Default directory holding the bootstrap script and the wasm package
pub const DEFAULT_STATIC_DIR: &str = "crates/web/static";

/// Entry module of the wasm package, relative to the static directory
pub const GUARD_PACKAGE_ENTRY: &str = "pkg/analyser_guard.js";

/// Command that builds the wasm package into the default static directory
pub const GUARD_BUILD_COMMAND: &str =
    "wasm-pack build crates/guard-wasm --target web --out-dir ../web/static/pkg";

/// Analyser site configuration.
#[derive(Debug, Clone, Validate)]
pub struct WebConfig {
    /// Bind address, port and log level
    #[validate(nested)]
    pub service: ServiceConfig,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Element ids rendered into the analyser form
    pub binding: GuardBinding,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            service: ServiceConfig {
                host: env::var("WEB_HOST").unwrap_or(defaults.host),
                port: env::var("WEB_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: env::var("WEB_LOG_LEVEL").unwrap_or(defaults.log_level),
                service_name: defaults.service_name,
            },
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            binding: GuardBinding::default(),
        }
    }

    /// Override host and port, e.g. from command-line flags.
    pub fn with_address(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }

    /// Location of the guard's wasm-bindgen entry module.
    pub fn guard_package_path(&self) -> PathBuf {
        self.static_dir.join(GUARD_PACKAGE_ENTRY)
    }

    /// Whether the browser guard has been built into the static directory.
    pub fn guard_package_present(&self) -> bool {
        self.guard_package_path().is_file()
    }

    /// Validate the whole configuration before serving.
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        self.binding.validate()?;
        Ok(())
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            binding: GuardBinding::default(),
        }
    }
}
