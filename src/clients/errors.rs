//! HTTP-specific error types for the Boleto Simples SDK.
//!
//! This module contains error types for HTTP operations:
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Failures that prevented a response from being received
//! - [`ResponseError`]: The record materialized for every 4xx/5xx response
//!
//! Error statuses are not failures at this layer: [`HttpClient::send`]
//! returns 4xx and 5xx responses as ordinary [`HttpResponse`] values so the
//! caller can inspect their status and body.
//!
//! [`HttpClient::send`]: crate::clients::HttpClient::send
//! [`HttpResponse`]: crate::clients::HttpResponse

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT requests
/// - Body provided without `body_type`
///
/// # Example
///
/// ```rust
/// use boleto_simples::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Failures that prevented an HTTP response from being received.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Record of an API error response (status 400-599).
///
/// One is built for every error response so that callers and log
/// subscribers can react to API error signaling independently of the
/// boolean result of a resource operation.
///
/// # Example
///
/// ```rust
/// use boleto_simples::clients::{HttpResponse, ResponseError};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     422,
///     HashMap::new(),
///     Some(json!({"errors": ["amount required"]})),
/// );
///
/// let error = ResponseError::from_response(&response).unwrap();
/// assert_eq!(error.code, 422);
/// assert_eq!(error.errors, Some(json!(["amount required"])));
/// assert_eq!(error.to_string(), r#"HTTP 422: {"errors":["amount required"]}"#);
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("HTTP {code}: {message}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The `errors` field of the response body, verbatim.
    pub errors: Option<serde_json::Value>,
    /// Reference ID for error reporting (from `X-Request-Id` header).
    pub request_id: Option<String>,
}

impl ResponseError {
    /// Builds the error record for a response with status 400-599.
    ///
    /// Returns `None` for any other status.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        if !response.is_error() {
            return None;
        }

        Some(Self {
            code: response.code,
            message: serialize_error(response),
            errors: response.body_field("errors").cloned(),
            request_id: response.request_id().map(String::from),
        })
    }
}

/// Serializes the error-related fields of a response body to JSON.
fn serialize_error(response: &HttpResponse) -> String {
    let mut error_body = serde_json::Map::new();

    if let Some(errors) = response.body_field("errors") {
        error_body.insert("errors".to_string(), errors.clone());
    }
    if let Some(error) = response.body_field("error") {
        error_body.insert("error".to_string(), error.clone());
        if let Some(desc) = response.body_field("error_description") {
            error_body.insert("error_description".to_string(), desc.clone());
        }
    }

    serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
}

// Verify ResponseError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: Option<serde_json::Value>) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "PUT".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use PUT without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let error: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert!(error.to_string().contains("body_type"));
    }

    #[test]
    fn test_response_error_only_for_error_statuses() {
        assert!(ResponseError::from_response(&response(200, None)).is_none());
        assert!(ResponseError::from_response(&response(302, None)).is_none());
        assert!(ResponseError::from_response(&response(400, None)).is_some());
        assert!(ResponseError::from_response(&response(599, None)).is_some());
        assert!(ResponseError::from_response(&response(600, None)).is_none());
    }

    #[test]
    fn test_response_error_captures_errors_verbatim() {
        let errors = json!({"amount": ["can't be blank"], "expire_at": ["is invalid"]});
        let error =
            ResponseError::from_response(&response(422, Some(json!({ "errors": errors.clone() }))))
                .unwrap();

        assert_eq!(error.errors, Some(errors));
        assert!(error.message.contains("can't be blank"));
    }

    #[test]
    fn test_response_error_serializes_oauth_style_errors() {
        let error = ResponseError::from_response(&response(
            401,
            Some(json!({
                "error": "invalid_token",
                "error_description": "The access token is invalid",
                "ignored": true
            })),
        ))
        .unwrap();

        assert!(error.errors.is_none());
        assert!(error.message.contains("invalid_token"));
        assert!(error.message.contains("The access token is invalid"));
        assert!(!error.message.contains("ignored"));
    }

    #[test]
    fn test_response_error_without_body() {
        let error = ResponseError::from_response(&response(503, None)).unwrap();
        assert_eq!(error.message, "{}");
        assert_eq!(error.to_string(), "HTTP 503: {}");
    }

    #[test]
    fn test_response_error_includes_request_id() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
        let response = HttpResponse::new(500, headers, None);

        let error = ResponseError::from_response(&response).unwrap();
        assert_eq!(error.request_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;

        let response_error: &dyn std::error::Error = &ResponseError {
            code: 404,
            message: "{}".to_string(),
            errors: None,
            request_id: None,
        };
        let _ = response_error;
    }
}
