//! Error types for loading service configuration from the environment.

/// Errors that can occur while reading [`ServiceConfig`](crate::ServiceConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing environment variable {0}: {1}")]
    MissingEnvVar(&'static str, #[source] dotenvy::Error),

    /// Environment variable is present but cannot be parsed
    #[error("Invalid value for {name}: {details}")]
    InvalidValue { name: &'static str, details: String },
}

impl ConfigError {
    pub fn invalid_value(name: &'static str, details: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name,
            details: details.into(),
        }
    }
}
