//! Diagnostic record of a request/response exchange.
//!
//! Every resource operation returns the [`LastRequest`] it produced, so that
//! concurrent callers never share a mutable "last request" slot.

use chrono::{DateTime, Utc};

use crate::clients::{HttpClient, HttpRequest, HttpResponse, ResponseError};

/// One request issued by a resource operation, with what came back.
///
/// # Example
///
/// ```rust,ignore
/// let response = Customer::find(&client, 42).await?;
/// let last = response.last_request();
///
/// println!("{} at {}", last.request, last.sent_at);
/// if let Some(error) = &last.response_error {
///     println!("API error {}: {}", error.code, error.message);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct LastRequest {
    /// The request that was sent.
    pub request: HttpRequest,
    /// When the request was sent.
    pub sent_at: DateTime<Utc>,
    /// The response, or `None` when the transport failed.
    pub response: Option<HttpResponse>,
    /// The error record built for a 4xx/5xx response.
    pub response_error: Option<ResponseError>,
    /// The transport failure, when no response was received.
    pub transport_error: Option<String>,
}

impl LastRequest {
    /// Sends `request` through `client` and records the exchange.
    ///
    /// Never fails: transport failures are recorded in
    /// [`transport_error`](Self::transport_error) and error statuses in
    /// [`response_error`](Self::response_error).
    pub async fn perform(client: &HttpClient, request: HttpRequest) -> Self {
        let sent_at = Utc::now();

        match client.send(&request).await {
            Ok(response) => {
                let response_error = ResponseError::from_response(&response);
                if let Some(error) = &response_error {
                    tracing::warn!(
                        code = error.code,
                        request_id = error.request_id.as_deref(),
                        "Boleto Simples API error for {}: {}",
                        request,
                        error.message
                    );
                }

                Self {
                    request,
                    sent_at,
                    response: Some(response),
                    response_error,
                    transport_error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Request {} failed: {}", request, e);

                Self {
                    request,
                    sent_at,
                    response: None,
                    response_error: None,
                    transport_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Returns the response status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|response| response.code)
    }

    /// Returns `true` if a 2xx response was received.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.response.as_ref().is_some_and(HttpResponse::is_ok)
    }
}
