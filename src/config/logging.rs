//! Logging configuration and tracing setup

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Log filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: Option<bool>,
}

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl LoggingConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// JSON output unless configured otherwise; production defaults to JSON.
    pub fn use_json(&self) -> bool {
        self.json.unwrap_or_else(|| self.is_production())
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;
        Ok(())
    }

    /// Install the global tracing subscriber.
    ///
    /// Calling this twice is harmless; the second install is ignored.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new(default_log_level()));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.use_json() {
            registry
                .with(fmt::layer().json().with_current_span(false))
                .try_init()
        } else {
            registry.with(fmt::layer().with_target(true)).try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            json: None,
        }
    }
}

fn default_log_level() -> String {
    "info,subscription_workbench=debug".to_string()
}
