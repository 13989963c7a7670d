//! Runtime settings, read from the function's environment.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Output format of log records.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    Compact,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings injected by the provisioning stack.
///
/// | Variable               | Required | Default |
/// |------------------------|----------|---------|
/// | `CUSTOMERS_TABLE_NAME` | yes      |         |
/// | `LOG_LEVEL`            | no       | `info`  |
/// | `LOG_FORMAT`           | no       | `json`  |
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// Name of the DynamoDB table holding customer records.
    pub customers_table_name: String,
    /// `tracing` filter directive, e.g. `info` or `customer_crud=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        if settings.customers_table_name.is_empty() {
            return Err(ConfigError::Message(
                "CUSTOMERS_TABLE_NAME must not be empty".to_string(),
            ));
        }
        Ok(settings)
    }
}
