//! HTTP client for Boleto Simples API communication.
//!
//! This module provides the [`HttpClient`] type, the authenticated gateway
//! every resource operation goes through.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUri, Configuration};

/// HTTP client for making requests to the Boleto Simples API.
///
/// The client handles:
/// - URL construction from the configured base URI
/// - Default headers including User-Agent and the OAuth2 bearer token
/// - JSON decoding of response bodies
///
/// Responses with 4xx and 5xx statuses are returned as ordinary
/// [`HttpResponse`] values; only invalid requests and network failures
/// produce an [`HttpError`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use boleto_simples::{AccessToken, Configuration};
/// use boleto_simples::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = Configuration::builder()
///     .access_token(AccessToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "bank_billets/1")
///     .build()
///     .unwrap();
///
/// let response = client.send(&request).await?;
/// if response.is_ok() {
///     println!("Bank billet: {:?}", response.body);
/// }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://sandbox.boletosimples.com.br/api/v1`).
    base_uri: BaseUri,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Configuration) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.base_uri().clone(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.base_uri.join(path)
    }

    /// Sends an HTTP request to the Boleto Simples API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    ///
    /// Non-2xx responses are not errors.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("Sending {} to {}", request, url);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = HttpResponse::decode_body(&body_text);

        if body.is_none() && !body_text.trim().is_empty() {
            tracing::debug!(
                "Response from {} with status {} is not valid JSON",
                request.path,
                code
            );
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_config() -> Configuration {
        Configuration::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_base_uri() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.base_uri().as_ref(),
            "https://sandbox.boletosimples.com.br/api/v1"
        );
        assert_eq!(
            client.url_for("bank_billets/1"),
            "https://sandbox.boletosimples.com.br/api/v1/bank_billets/1"
        );
    }

    #[test]
    fn test_user_agent_header_comes_from_config() {
        let config = Configuration::builder()
            .access_token(AccessToken::new("token").unwrap())
            .user_agent("Minha Loja (dev@minhaloja.com.br)")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("User-Agent"),
            Some(&"Minha Loja (dev@minhaloja.com.br)".to_string())
        );
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
