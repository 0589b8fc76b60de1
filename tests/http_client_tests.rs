//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the default headers, request building, response
//! parsing, and the handling of error statuses against a mock server.

use boleto_simples::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use boleto_simples::{AccessToken, BaseUri, Configuration, HttpError, InvalidHttpRequestError};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HttpClient) {
    let server = MockServer::start().await;
    let config = Configuration::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_uri(BaseUri::new(format!("{}/api/v1/", server.uri())).unwrap())
        .user_agent("Minha Loja (dev@minhaloja.com.br)")
        .build()
        .unwrap();
    (server, HttpClient::new(&config))
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/userinfo"))
        .and(bearer_token("test-token"))
        .and(header("user-agent", "Minha Loja (dev@minhaloja.com.br)"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "userinfo")
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body, Some(json!({"id": 1})));
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/customers"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"customer": {"person_name": "Fulano"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "customers")
        .body(json!({"customer": {"person_name": "Fulano"}}))
        .body_type(DataType::Json)
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.code, 201);
}

// ============================================================================
// Responses
// ============================================================================

#[tokio::test]
async fn test_error_statuses_are_returned_not_raised() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bank_billets/1"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_json(json!({"error": "invalid_token"})),
        )
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "bank_billets/1")
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.code, 401);
    assert!(response.is_error());
    assert_eq!(response.request_id(), Some("abc-123"));
    assert_eq!(response.body_field("error"), Some(&json!("invalid_token")));
}

#[tokio::test]
async fn test_non_json_body_is_dropped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "health")
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert!(response.is_ok());
    assert!(response.body.is_none());
}

#[tokio::test]
async fn test_query_pairs_are_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bank_billets"))
        .and(query_param("q[customer_person_name]", "José da Silva"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "bank_billets")
        .query_param("q[customer_person_name]", "José da Silva")
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.body, Some(json!([])));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let config = Configuration::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_uri(BaseUri::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config);

    let request = HttpRequest::builder(HttpMethod::Get, "customers")
        .build()
        .unwrap();
    let result = client.send(&request).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = HttpRequest {
        http_method: HttpMethod::Put,
        path: "customers/1".to_string(),
        body: None,
        body_type: None,
        query: Vec::new(),
    };
    let result = client.send(&request).await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingBody { .. }
        ))
    ));
}
