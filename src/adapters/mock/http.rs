//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded POST for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

/// Configured outcome for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// HTTP client that answers from a table and records every request.
///
/// Lookup order is exact URL, then URL prefix, then the default response.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(url.to_string(), response);
        }
    }

    pub fn set_default_response(&self, response: MockResponse) {
        if let Ok(mut default) = self.default_response.lock() {
            *default = Some(response);
        }
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
                body: body.to_string(),
            });
        }
    }

    fn lookup(&self, url: &str) -> Option<MockResponse> {
        if let Ok(responses) = self.responses.lock() {
            if let Some(response) = responses.get(url) {
                return Some(response.clone());
            }
            if let Some((_, response)) = responses
                .iter()
                .find(|(pattern, _)| url.starts_with(pattern.as_str()))
            {
                return Some(response.clone());
            }
        }
        self.default_response
            .lock()
            .ok()
            .and_then(|default| default.clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers, body);

        match self.lookup(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_post_records_body_and_headers() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/lesson",
            MockResponse::Success(Response::new(200, "[]")),
        );

        let mut headers = Headers::new();
        headers.insert("x-goog-api-key".to_string(), "secret".to_string());
        let response = client
            .post("https://example.com/lesson", r#"{"a":1}"#, &headers)
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, r#"{"a":1}"#);
        assert_eq!(
            requests[0].headers.get("x-goog-api-key"),
            Some(&"secret".to_string())
        );
    }

    #[tokio::test]
    async fn test_prefix_match_and_default() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/models/",
            MockResponse::Error(HttpError::Timeout("slow".to_string())),
        );
        client.set_default_response(MockResponse::Success(Response::new(404, "")));

        let prefixed = client
            .post("https://example.com/models/m:generateContent", "", &Headers::new())
            .await;
        assert!(matches!(prefixed, Err(HttpError::Timeout(_))));

        let fallback = client
            .post("https://other.example.com", "", &Headers::new())
            .await
            .unwrap();
        assert_eq!(fallback.status, 404);
    }

    #[tokio::test]
    async fn test_unconfigured_url_is_an_error() {
        let client = MockHttpClient::new();
        let result = client.post("https://nowhere", "", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }
}
