use async_trait::async_trait;
use std::time::Duration;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::provider("http", format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::provider("http", format!("Failed to parse response: {}", e)))
    }
}

/// Authorization headers shared by the inference backends
pub(crate) fn json_headers(auth_header: Option<&str>) -> Vec<(&str, &str)> {
    let mut headers = vec![("Content-Type", "application/json")];

    if let Some(auth) = auth_header {
        headers.push(("Authorization", auth));
    }

    headers
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Debug)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
        requests: RwLock<Vec<(String, serde_json::Value)>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self {
                responses: RwLock::new(HashMap::new()),
                errors: RwLock::new(HashMap::new()),
                requests: RwLock::new(Vec::new()),
            }
        }

        pub fn with_response(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(url.into(), error.into());
            self
        }

        /// Bodies posted so far, with their URLs
        pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
            self.requests.read().unwrap().clone()
        }
    }

    impl Default for MockHttpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn post_json(
            &self,
            url: &str,
            _headers: Vec<(&str, &str)>,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.requests
                .write()
                .unwrap()
                .push((url.to_string(), body.clone()));

            if let Some(error) = self.errors.read().unwrap().get(url) {
                return Err(DomainError::provider("mock", error));
            }

            self.responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| DomainError::provider("mock", format!("No mock response for {}", url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embed"))
            .and(header("Authorization", "Bearer secret"))
            .and(body_json(serde_json::json!({"inputs": ["a"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[1.0, 2.0]])))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/embed", server.uri());
        let response = client
            .post_json(
                &url,
                json_headers(Some("Bearer secret")),
                &serde_json::json!({"inputs": ["a"]}),
            )
            .await
            .unwrap();

        assert_eq!(response, serde_json::json!([[1.0, 2.0]]));
    }

    #[tokio::test]
    async fn test_post_json_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        let err = client
            .post_json(&server.uri(), json_headers(None), &serde_json::json!({}))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("model loading"));
    }

    #[test]
    fn test_json_headers() {
        assert_eq!(json_headers(None), vec![("Content-Type", "application/json")]);
        assert_eq!(json_headers(Some("Bearer x")).len(), 2);
    }
}
