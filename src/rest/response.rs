//! Result wrappers for REST resource operations.
//!
//! HTTP failures do not surface as `Err`: every operation that reached the
//! network returns an [`Outcome`] (success flag plus the [`LastRequest`]),
//! and operations that produce resources wrap them in a
//! [`ResourceResponse<T>`] carrying that outcome.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner type directly:
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<Customer>> = Customer::all(&client, None).await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for customer in response.iter() {
//!     println!("{:?}", customer.get("person_name"));
//! }
//!
//! // Take ownership of inner data
//! let customers: Vec<Customer> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use crate::rest::LastRequest;

/// Success flag and diagnostic record of one resource operation.
#[derive(Clone, Debug)]
pub struct Outcome {
    success: bool,
    last_request: LastRequest,
}

impl Outcome {
    /// Creates a new outcome.
    #[must_use]
    pub const fn new(success: bool, last_request: LastRequest) -> Self {
        Self {
            success,
            last_request,
        }
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns the request/response record of the operation.
    #[must_use]
    pub const fn last_request(&self) -> &LastRequest {
        &self.last_request
    }

    /// Consumes the outcome and returns the request/response record.
    #[must_use]
    pub fn into_last_request(self) -> LastRequest {
        self.last_request
    }
}

/// Resource data returned by an operation, together with its [`Outcome`].
///
/// # Type Parameters
///
/// * `T` - The resource type for `find`/`create`, or `Vec<T>` for `all`.
#[derive(Clone, Debug)]
pub struct ResourceResponse<T> {
    data: T,
    outcome: Outcome,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, outcome: Outcome) -> Self {
        Self { data, outcome }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data and the outcome.
    #[must_use]
    pub fn into_parts(self) -> (T, Outcome) {
        (self.data, self.outcome)
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.success()
    }

    /// Returns the operation outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the request/response record of the operation.
    #[must_use]
    pub const fn last_request(&self) -> &LastRequest {
        self.outcome.last_request()
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
