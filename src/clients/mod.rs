//! HTTP gateway types for Boleto Simples API communication.
//!
//! This module provides the HTTP layer that resource operations are built
//! on. It owns transport, authentication headers and the base URI; it does
//! not interpret responses beyond decoding their JSON body.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async, authenticated HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A status code, headers and an optional decoded body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`ResponseError`]: The record built for every 4xx/5xx response
//!
//! # Example
//!
//! ```rust,ignore
//! use boleto_simples::{AccessToken, Configuration};
//! use boleto_simples::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = Configuration::from_env()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "customers")
//!     .query_param("page", "1")
//!     .build()?;
//!
//! let response = client.send(&request).await?;
//! println!("{} {:?}", response.code, response.body);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError, ResponseError};
pub use http_client::HttpClient;
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
