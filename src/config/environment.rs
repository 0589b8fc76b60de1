//! Boleto Simples API environments.
//!
//! This module provides the [`Environment`] enum for selecting which
//! Boleto Simples deployment the SDK talks to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Boleto Simples API deployment.
///
/// Each environment maps to a fixed API base URI. Use
/// [`ConfigurationBuilder::base_uri`](crate::ConfigurationBuilder::base_uri)
/// to target any other host (a proxy or a local mock server).
///
/// # Example
///
/// ```rust
/// use boleto_simples::Environment;
///
/// let environment: Environment = "production".parse().unwrap();
/// assert_eq!(environment, Environment::Production);
/// assert_eq!(environment.base_uri(), "https://boletosimples.com.br/api/v1");
///
/// assert_eq!(Environment::default(), Environment::Sandbox);
/// assert_eq!(Environment::Sandbox.to_string(), "sandbox");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The live API, operating on real bank billets.
    Production,
    /// The sandbox API for integration testing.
    #[default]
    Sandbox,
}

impl Environment {
    /// Returns the API base URI for this environment.
    #[must_use]
    pub const fn base_uri(&self) -> &'static str {
        match self {
            Self::Production => "https://boletosimples.com.br/api/v1",
            Self::Sandbox => "https://sandbox.boletosimples.com.br/api/v1",
        }
    }

    /// Returns `true` for the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment {
                environment: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parses_known_names() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "Sandbox".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
        assert_eq!(
            " sandbox ".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
    }

    #[test]
    fn test_environment_rejects_unknown_names() {
        let result = "staging".parse::<Environment>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { environment }) if environment == "staging"
        ));
    }

    #[test]
    fn test_environment_display_round_trips() {
        for environment in [Environment::Production, Environment::Sandbox] {
            let parsed: Environment = environment.to_string().parse().unwrap();
            assert_eq!(parsed, environment);
        }
    }

    #[test]
    fn test_environment_base_uris() {
        assert_eq!(
            Environment::Production.base_uri(),
            "https://boletosimples.com.br/api/v1"
        );
        assert_eq!(
            Environment::Sandbox.base_uri(),
            "https://sandbox.boletosimples.com.br/api/v1"
        );
        assert!(Environment::Production.is_production());
        assert!(!Environment::Sandbox.is_production());
    }
}
