//! REST resource infrastructure for the Boleto Simples API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: CRUD operations over an attribute bag
//! - **[`ResourceData`]**: The ordered attribute map plus captured `errors`
//! - **[`ResourceResponse<T>`]** and **[`Outcome`]**: Success flag and
//!   [`LastRequest`] returned by every operation that reached the network
//! - **[`Action`]**: The fixed action to HTTP verb table
//! - **[`ResourceError`]**: Operations refused before anything was sent
//!
//! Concrete resources (`BankBillet`, `Customer`, ...) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use boleto_simples::{Configuration, HttpClient};
//! use boleto_simples::rest::Resource;
//! use boleto_simples::rest::resources::BankBillet;
//! use serde_json::json;
//!
//! let config = Configuration::from_env()?;
//! let client = HttpClient::new(&config);
//!
//! // Create
//! let attributes = json!({"amount": 9.01, "expire_at": "2025-01-01"});
//! let response = BankBillet::create(&client, attributes.as_object().unwrap().clone()).await?;
//! let mut billet = response.into_inner();
//!
//! if billet.is_persisted() {
//!     // Update
//!     billet.set("description", "Mensalidade");
//!     let outcome = billet.save(&client).await?;
//!     println!("{} -> {:?}", outcome.last_request().request, outcome.last_request().status());
//!
//!     // Member action
//!     billet.cancel(&client).await?;
//! } else {
//!     println!("Rejected: {:?}", billet.response_errors());
//! }
//!
//! // List
//! let params = json!({"page": 1, "per_page": 50});
//! for billet in BankBillet::all(&client, params.as_object()).await?.iter() {
//!     println!("{:?}", billet.id());
//! }
//! ```

mod action;
mod data;
mod errors;
mod last_request;
mod query;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use action::Action;
pub use data::{Attributes, ResourceData};
pub use errors::ResourceError;
pub use last_request::LastRequest;
pub use query::to_query;
pub use resource::Resource;
pub use response::{Outcome, ResourceResponse};
