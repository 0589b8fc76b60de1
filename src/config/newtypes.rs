//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated OAuth2 access token.
///
/// Tokens are acquired outside the SDK (authorization code flow, personal
/// token from the Boleto Simples dashboard, ...) and handed over ready-made.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use boleto_simples::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API base URI.
///
/// The URI must carry a scheme and a host. Trailing slashes are trimmed so
/// that resource paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use boleto_simples::BaseUri;
///
/// let uri = BaseUri::new("https://sandbox.boletosimples.com.br/api/v1/").unwrap();
/// assert_eq!(uri.as_ref(), "https://sandbox.boletosimples.com.br/api/v1");
/// assert_eq!(uri.scheme(), "https");
/// assert_eq!(uri.host_name(), "sandbox.boletosimples.com.br");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri {
    uri: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUri {
    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the URI has no scheme or no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let uri = uri.trim().trim_end_matches('/').to_string();

        let scheme_end = uri
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUri { uri: uri.clone() })?;

        let scheme = &uri[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUri { uri: uri.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= uri.len() {
            return Err(ConfigError::InvalidBaseUri { uri: uri.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &uri[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(uri.len(), |i| host_start + i);

        if host_start == host_end {
            return Err(ConfigError::InvalidBaseUri { uri: uri.clone() });
        }

        Ok(Self {
            uri,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URI scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.uri[..self.scheme_end]
    }

    /// Returns the host name portion of the URI.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.uri[self.host_start..self.host_end]
    }

    /// Joins a relative resource path onto this base URI.
    ///
    /// Leading slashes on `path` are ignored.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.uri, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
