//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address and upstream URL
//! - Check the public scheme is one the relay can emit
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("upstream base_url '{0}' is not an absolute http(s) URL")]
    UpstreamUrl(String),

    #[error("webhook public_scheme '{0}' must be 'http' or 'https'")]
    PublicScheme(String),
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::UpstreamUrl(
            config.upstream.base_url.clone(),
        )),
    }

    if config.webhook.public_scheme != "http" && config.webhook.public_scheme != "https" {
        errors.push(ValidationError::PublicScheme(
            config.webhook.public_scheme.clone(),
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
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "nope".into();
        config.upstream.base_url = "ftp://example.com".into();
        config.webhook.public_scheme = "gopher".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_relative_upstream_url_rejected() {
        let mut config = RelayConfig::default();
        config.upstream.base_url = "api.telegram.org".into();
        assert!(validate_config(&config).is_err());
    }
}
