//! HTTP response types for the Boleto Simples SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data.

use std::collections::HashMap;

/// An HTTP response from the Boleto Simples API.
///
/// Contains the response status code, headers and the decoded body. The body
/// is `None` when the response had no content or the content was not valid
/// JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: Option<serde_json::Value>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Decodes a raw response body.
    ///
    /// Empty (or whitespace-only) and malformed bodies decode to `None`.
    #[must_use]
    pub fn decode_body(text: &str) -> Option<serde_json::Value> {
        if text.trim().is_empty() {
            return None;
        }
        serde_json::from_str(text).ok()
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response status code is in the 400-599 range.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400 && self.code <= 599
    }

    /// Returns a top-level field of an object body.
    #[must_use]
    pub fn body_field(&self, key: &str) -> Option<&serde_json::Value> {
        self.body.as_ref().and_then(|body| body.get(key))
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), None);
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_outside_2xx() {
        for code in [100, 199, 300, 304, 400, 422, 500] {
            let response = HttpResponse::new(code, HashMap::new(), None);
            assert!(!response.is_ok(), "Expected is_ok() false for {code}");
        }
    }

    #[test]
    fn test_is_error_covers_4xx_and_5xx() {
        for code in [400, 401, 404, 422, 429, 500, 503, 599] {
            let response = HttpResponse::new(code, HashMap::new(), None);
            assert!(response.is_error(), "Expected is_error() for {code}");
        }
        for code in [200, 201, 204, 301] {
            let response = HttpResponse::new(code, HashMap::new(), None);
            assert!(!response.is_error(), "Expected !is_error() for {code}");
        }
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(HttpResponse::decode_body(""), None);
        assert_eq!(HttpResponse::decode_body("  \n"), None);
        assert_eq!(HttpResponse::decode_body("<html>oops</html>"), None);
        assert_eq!(HttpResponse::decode_body("[]"), Some(json!([])));
        assert_eq!(
            HttpResponse::decode_body(r#"{"id": 1}"#),
            Some(json!({"id": 1}))
        );
    }

    #[test]
    fn test_body_field() {
        let response = HttpResponse::new(
            422,
            HashMap::new(),
            Some(json!({"errors": ["amount required"]})),
        );
        assert_eq!(
            response.body_field("errors"),
            Some(&json!(["amount required"]))
        );
        assert!(response.body_field("missing").is_none());

        let array_body = HttpResponse::new(200, HashMap::new(), Some(json!([1, 2])));
        assert!(array_body.body_field("errors").is_none());

        let no_body = HttpResponse::new(204, HashMap::new(), None);
        assert!(no_body.body_field("errors").is_none());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, None);
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123-xyz"));
    }
}
