//! # Boleto Simples Rust SDK
//!
//! A Rust SDK for the Boleto Simples API, mapping remote records (bank
//! billets, customers, webhooks, ...) onto local resources with CRUD
//! operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Configuration`] and [`ConfigurationBuilder`]
//! - Validated newtypes for the access token and base URI
//! - An async HTTP client that applies authentication, user agent and base URI
//! - The [`Resource`] trait: `find`, `create`, `all`, `save`, `destroy` over an
//!   ordered attribute map
//! - A [`LastRequest`] record returned with the result of every call
//!
//! ## Quick Start
//!
//! ```rust
//! use boleto_simples::{AccessToken, Configuration, Environment, HttpClient};
//!
//! let config = Configuration::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! assert_eq!(
//!     client.url_for("bank_billets"),
//!     "https://sandbox.boletosimples.com.br/api/v1/bank_billets"
//! );
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use boleto_simples::{BankBillet, Configuration, HttpClient, Resource};
//! use serde_json::json;
//!
//! let client = HttpClient::new(&Configuration::from_env()?);
//!
//! let attributes = json!({
//!     "amount": 9.01,
//!     "expire_at": "2025-01-01",
//!     "customer_person_name": "Nome do Cliente",
//!     "customer_cnpj_cpf": "125.812.717-28",
//! });
//! let response = BankBillet::create(&client, attributes.as_object().unwrap().clone()).await?;
//!
//! if response.success() {
//!     println!("Created billet {:?}", response.id());
//! } else {
//!     println!("Errors: {:?}", response.response_errors());
//!     println!("Request: {}", response.last_request().request);
//! }
//! ```
//!
//! ## Error Handling
//!
//! HTTP failures are not `Err`: a 4xx/5xx response or a network failure gives
//! `success() == false`, with the server's `errors` payload on the resource
//! and the details on the [`LastRequest`]. `Err(`[`ResourceError`]`)` is
//! reserved for operations refused before anything was sent, such as
//! `find` without an id.
//!
//! ## Logging
//!
//! Requests are logged with [`tracing`](https://docs.rs/tracing) at `debug`
//! level, and API error responses and transport failures at `warn` level.
//! Install a subscriber in your application to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and client are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUri, Configuration, ConfigurationBuilder, Environment};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ResponseError,
};

// Re-export resource types
pub use rest::resources::{
    BankBillet, BankBilletAccount, Customer, CustomerSubscription, Discharge, Installment,
    Remittance, Transaction, Webhook,
};
pub use rest::{
    Action, Attributes, LastRequest, Outcome, Resource, ResourceData, ResourceError,
    ResourceResponse,
};
