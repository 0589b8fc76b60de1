//! Configuration types for the Boleto Simples SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Boleto Simples.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Configuration`]: The configuration struct holding all SDK settings
//! - [`ConfigurationBuilder`]: A builder for constructing [`Configuration`] instances
//! - [`AccessToken`]: A validated OAuth2 access token with masked debug output
//! - [`BaseUri`]: A validated API base URI
//! - [`Environment`]: The Boleto Simples deployment to target
//!
//! # Example
//!
//! ```rust
//! use boleto_simples::{AccessToken, Configuration, Environment};
//!
//! let config = Configuration::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .environment(Environment::Production)
//!     .user_agent("Minha Loja (dev@minhaloja.com.br)")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://boletosimples.com.br/api/v1");
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{AccessToken, BaseUri};

use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the [`Environment`].
pub const ENV_ENVIRONMENT: &str = "BOLETOSIMPLES_ENV";
/// Environment variable holding the OAuth2 access token.
pub const ENV_ACCESS_TOKEN: &str = "BOLETOSIMPLES_ACCESS_TOKEN";
/// Environment variable overriding the API base URI.
pub const ENV_BASE_URI: &str = "BOLETOSIMPLES_BASE_URI";
/// Environment variable overriding the `User-Agent` header.
pub const ENV_USER_AGENT: &str = "BOLETOSIMPLES_USER_AGENT";

/// Configuration for the Boleto Simples SDK.
///
/// Holds the access credentials, the API base URI and the user agent sent
/// with every request. A configuration is built once and then only read.
///
/// # Thread Safety
///
/// `Configuration` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use boleto_simples::{AccessToken, Configuration};
///
/// let config = Configuration::builder()
///     .access_token(AccessToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.user_agent().starts_with("BoletoSimples Rust Client v"));
/// ```
#[derive(Clone, Debug)]
pub struct Configuration {
    access_token: AccessToken,
    environment: Environment,
    base_uri: BaseUri,
    user_agent: String,
}

impl Configuration {
    /// Creates a new builder for constructing a `Configuration`.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `BOLETOSIMPLES_ACCESS_TOKEN` (required), `BOLETOSIMPLES_ENV`,
    /// `BOLETOSIMPLES_BASE_URI` and `BOLETOSIMPLES_USER_AGENT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is missing or any value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Uses the same keys as [`Configuration::from_env`]. Empty values are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is missing or any value is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boleto_simples::{Configuration, Environment};
    ///
    /// let config = Configuration::from_lookup(|key| match key {
    ///     "BOLETOSIMPLES_ACCESS_TOKEN" => Some("token".to_string()),
    ///     "BOLETOSIMPLES_ENV" => Some("production".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.environment(), Environment::Production);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(token) = read(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(environment) = read(ENV_ENVIRONMENT) {
            builder = builder.environment(environment.parse()?);
        }
        if let Some(uri) = read(ENV_BASE_URI) {
            builder = builder.base_uri(BaseUri::new(uri)?);
        }
        if let Some(user_agent) = read(ENV_USER_AGENT) {
            builder = builder.user_agent(user_agent);
        }

        builder.build()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the selected environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the API base URI.
    ///
    /// This is the explicit base URI when one was configured, otherwise the
    /// environment's URI.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

// Verify Configuration is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Configuration>();
};

/// Builder for constructing [`Configuration`] instances.
///
/// `access_token` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `base_uri`: the environment's base URI
/// - `user_agent`: `BoletoSimples Rust Client v<version>`
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    access_token: Option<AccessToken>,
    environment: Option<Environment>,
    base_uri: Option<BaseUri>,
    user_agent: Option<String>,
}

impl ConfigurationBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets an explicit base URI, taking precedence over the environment.
    #[must_use]
    pub fn base_uri(mut self, uri: BaseUri) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    ///
    /// Boleto Simples asks integrators to identify their application and a
    /// contact e-mail here.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the [`Configuration`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let environment = self.environment.unwrap_or_default();
        let base_uri = match self.base_uri {
            Some(uri) => uri,
            None => BaseUri::new(environment.base_uri())?,
        };

        Ok(Configuration {
            access_token,
            environment,
            base_uri,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("BoletoSimples Rust Client v{SDK_VERSION}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ConfigurationBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = Configuration::builder()
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Sandbox);
        assert_eq!(
            config.base_uri().as_ref(),
            "https://sandbox.boletosimples.com.br/api/v1"
        );
        assert_eq!(
            config.user_agent(),
            format!("BoletoSimples Rust Client v{SDK_VERSION}")
        );
    }

    #[test]
    fn test_base_uri_overrides_environment() {
        let config = Configuration::builder()
            .access_token(token())
            .environment(Environment::Production)
            .base_uri(BaseUri::new("http://localhost:3000/api/v1").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.base_uri().as_ref(), "http://localhost:3000/api/v1");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Configuration>();
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = Configuration::builder()
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Configuration"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let values: HashMap<&str, &str> = [
            (ENV_ACCESS_TOKEN, "abc"),
            (ENV_ENVIRONMENT, "production"),
            (ENV_BASE_URI, "https://proxy.example.com/api/v1/"),
            (ENV_USER_AGENT, "Minha Loja (dev@minhaloja.com.br)"),
        ]
        .into_iter()
        .collect();

        let config =
            Configuration::from_lookup(|key| values.get(key).map(ToString::to_string)).unwrap();

        assert_eq!(config.access_token().as_ref(), "abc");
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(
            config.base_uri().as_ref(),
            "https://proxy.example.com/api/v1"
        );
        assert_eq!(config.user_agent(), "Minha Loja (dev@minhaloja.com.br)");
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let result = Configuration::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_from_lookup_treats_empty_values_as_unset() {
        let result = Configuration::from_lookup(|key| match key {
            ENV_ACCESS_TOKEN => Some("token".to_string()),
            _ => Some(String::new()),
        })
        .unwrap();

        assert_eq!(result.environment(), Environment::Sandbox);
    }

    #[test]
    fn test_from_lookup_rejects_unknown_environment() {
        let result = Configuration::from_lookup(|key| match key {
            ENV_ACCESS_TOKEN => Some("token".to_string()),
            ENV_ENVIRONMENT => Some("staging".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { .. })
        ));
    }
}
