//! Resource-specific error types for REST API operations.
//!
//! A [`ResourceError`] means an operation was refused before anything was
//! sent. HTTP-level failures are never reported here: a 4xx/5xx response or
//! a network failure is reflected in the resource's `response_errors` and the
//! operation's success flag instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use boleto_simples::rest::{Resource, ResourceError};
//! use boleto_simples::BankBillet;
//!
//! match BankBillet::find(&client, "").await {
//!     Err(ResourceError::MissingId { resource }) => println!("{resource} needs an id"),
//!     Err(e) => println!("Refused: {e}"),
//!     Ok(response) if response.success() => println!("Found: {:?}", response.attributes()),
//!     Ok(response) => println!("Failed: {:?}", response.response_errors()),
//! }
//! ```

use crate::clients::InvalidHttpRequestError;
use thiserror::Error;

/// Error type for refused REST resource operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// `find` was called without a usable identifier.
    #[error("Couldn't find {resource} without an ID.")]
    MissingId {
        /// The type name of the resource (e.g., `BankBillet`).
        resource: &'static str,
    },

    /// A member operation was attempted on a resource that has no `id`.
    #[error("Cannot {operation} {resource} that has not been persisted.")]
    NotPersisted {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "destroy", "cancel").
        operation: String,
    },

    /// The request could not be built.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
