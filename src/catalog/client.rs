//! Resource clients for the catalog API.

use std::sync::Arc;
use std::time::Instant;

use crate::adapters::ReqwestHttpClient;
use crate::config::{ClientConfig, FetchMode};
use crate::error::{ConfigError, FetchError, FetchResult};
use crate::models::{CatalogRecord, Category, Item};
use crate::traits::{Headers, HttpClient};

/// Longest slice of an error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Client for the read-only collection endpoints of the catalog API.
///
/// Each call issues exactly one `GET {base}/{resource}/`. Nothing is cached
/// and nothing is retried; every error is returned to the caller.
pub struct CatalogClient<C = ReqwestHttpClient> {
    http: Arc<C>,
    base_url: String,
    headers: Headers,
    fetch_mode: FetchMode,
}

impl<C> Clone for CatalogClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            base_url: self.base_url.clone(),
            headers: self.headers.clone(),
            fetch_mode: self.fetch_mode,
        }
    }
}

impl CatalogClient<ReqwestHttpClient> {
    /// Build the production client from a validated configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = ReqwestHttpClient::with_timeout(config.timeout)
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self::with_http(http, config))
    }
}

impl<C: HttpClient> CatalogClient<C> {
    /// Build a client over any [`HttpClient`] implementation.
    pub fn with_http(http: C, config: &ClientConfig) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            http: Arc::new(http),
            base_url: config.base_url().to_string(),
            headers,
            fetch_mode: config.fetch_mode,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ordering used by the mount-time fetch sequence.
    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    /// URL of a collection endpoint. The trailing slash is required by the
    /// server's router.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource)
    }

    /// `GET {base}/categories/`
    pub async fn fetch_categories(&self) -> FetchResult<Vec<Category>> {
        self.fetch_collection::<Category>().await
    }

    /// `GET {base}/items/`
    pub async fn fetch_items(&self) -> FetchResult<Vec<Item>> {
        self.fetch_collection::<Item>().await
    }

    /// Fetch and decode one collection, preserving server order.
    pub async fn fetch_collection<T: CatalogRecord>(&self) -> FetchResult<Vec<T>> {
        let resource = T::RESOURCE;
        let url = self.resource_url(resource);
        let start = Instant::now();
        tracing::debug!(resource, %url, "Fetching collection");

        let result = self.request::<T>(resource, &url).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(records) => {
                tracing::info!(resource, count = records.len(), elapsed_ms, "Fetched collection");
            }
            Err(err) => {
                tracing::warn!(
                    resource,
                    code = err.error_code(),
                    elapsed_ms,
                    "Fetch failed: {}",
                    err
                );
            }
        }

        result
    }

    async fn request<T: CatalogRecord>(
        &self,
        resource: &'static str,
        url: &str,
    ) -> FetchResult<Vec<T>> {
        let response = self
            .http
            .get(url, &self.headers)
            .await
            .map_err(|source| FetchError::Network { resource, source })?;

        if !response.is_success() {
            let message: String = response.text_lossy().chars().take(MAX_ERROR_BODY).collect();
            return Err(FetchError::Status {
                resource,
                status: response.status,
                message,
            });
        }

        response.json::<Vec<T>>().map_err(|e| FetchError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::EntityId;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client(mock: &MockHttpClient) -> CatalogClient<MockHttpClient> {
        CatalogClient::with_http(mock.clone(), &ClientConfig::new(BASE))
    }

    #[test]
    fn test_resource_url_keeps_trailing_slash() {
        let mock = MockHttpClient::new();
        let client = CatalogClient::with_http(mock, &ClientConfig::new("http://api.test/v1/"));
        assert_eq!(client.resource_url("categories"), "http://api.test/v1/categories/");
        assert_eq!(client.resource_url("items"), "http://api.test/v1/items/");
    }

    #[test]
    fn test_fetch_mode_comes_from_config() {
        let default = CatalogClient::with_http(MockHttpClient::new(), &ClientConfig::new(BASE));
        assert_eq!(default.fetch_mode(), FetchMode::Sequential);

        let config = ClientConfig::new(BASE).with_fetch_mode(FetchMode::Parallel);
        let parallel = CatalogClient::with_http(MockHttpClient::new(), &config);
        assert_eq!(parallel.clone().fetch_mode(), FetchMode::Parallel);
    }

    #[test]
    fn test_from_config_rejects_invalid_base() {
        let result = CatalogClient::from_config(&ClientConfig::new("localhost:8000"));
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(_))));
    }

    #[tokio::test]
    async fn test_fetch_categories_preserves_order() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/categories/",
            MockResponse::json(json!([
                {"id": 2, "name": "Snacks"},
                {"id": 1, "name": "Drinks"},
                {"id": 2, "name": "Snacks"}
            ])),
        );

        let categories = client(&mock).fetch_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Snacks", "Drinks", "Snacks"]);
    }

    #[tokio::test]
    async fn test_fetch_items_sends_accept_header() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/items/",
            MockResponse::json(json!([{"id": "a1", "title": "Cola"}])),
        );

        let items = client(&mock).fetch_items().await.unwrap();
        assert_eq!(items[0].id, EntityId::from("a1"));

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/categories/",
            MockResponse::status(500, "Internal Server Error"),
        );

        let err = client(&mock).fetch_categories().await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                resource: "categories",
                status: 500,
                message: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_body_is_truncated() {
        let mock = MockHttpClient::new();
        mock.set_response("http://api.test/items/", MockResponse::status(502, &"x".repeat(1000)));

        match client(&mock).fetch_items().await {
            Err(FetchError::Status { message, .. }) => assert_eq!(message.len(), MAX_ERROR_BODY),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_is_network() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/items/",
            MockResponse::Error(HttpError::Timeout("10s".to_string())),
        );

        let err = client(&mock).fetch_items().await.unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(matches!(err, FetchError::Network { resource: "items", .. }));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_decode_error() {
        let cases = [
            json!({"results": []}),
            json!([{"id": 1}]),
            json!([{"id": 1, "name": 5}]),
            json!([{"id": true, "name": "Drinks"}]),
        ];
        for body in cases {
            let mock = MockHttpClient::new();
            mock.set_response("http://api.test/categories/", MockResponse::json(body.clone()));
            let err = client(&mock).fetch_categories().await.unwrap_err();
            assert!(err.is_decode(), "{body}: {err:?}");
        }
    }

    #[tokio::test]
    async fn test_repeated_fetch_is_idempotent() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://api.test/items/",
            MockResponse::json(json!([{"id": 10, "title": "Cola"}, {"id": 11, "title": "Chips"}])),
        );
        let client = client(&mock);

        let first = client.fetch_items().await.unwrap();
        let second = client.fetch_items().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(mock.request_count("http://api.test/items/"), 2);
    }
}
