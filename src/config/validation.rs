//! Configuration validation.
//!
//! Serde handles syntax; this checks value ranges and addresses. Every
//! problem is reported, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::PhonebookConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `listener.port`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &PhonebookConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::new("listener.host", "must not be empty"));
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::new("listener.port", "must be between 1 and 65535"));
    }

    if config.static_files.enabled && config.static_files.dir.trim().is_empty() {
        errors.push(ValidationError::new(
            "static_files.dir",
            "must not be empty while static files are enabled",
        ));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::new("limits.max_body_bytes", "must be greater than 0"));
    }
    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "limits.request_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("invalid socket address '{}'", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PhonebookConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = PhonebookConfig::default();
        config.listener.port = 0;
        config.limits.max_body_bytes = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["listener.port", "limits.max_body_bytes", "observability.metrics_address"]
        );
    }

    #[test]
    fn test_empty_static_dir_allowed_when_disabled() {
        let mut config = PhonebookConfig::default();
        config.static_files.dir = String::new();
        assert!(validate_config(&config).is_err());

        config.static_files.enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
