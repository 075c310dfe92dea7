//! Shared fixtures for integration tests.
//!
//! Each test gets its own `MockServer`, so tests can run in parallel.

#![allow(dead_code)]

use gimme::catalog::CatalogClient;
use gimme::config::{ClientConfig, FetchMode};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn sample_categories() -> Value {
    json!([
        {"id": 1, "name": "Drinks", "description": "Cold ones"},
        {"id": 2, "name": "Snacks", "description": "Salty"}
    ])
}

pub fn sample_items() -> Value {
    json!([
        {"id": 10, "title": "Cola", "category": {"id": 1, "name": "Drinks"}, "rating": 4}
    ])
}

/// Mount a JSON body on `GET /{resource}/`.
pub async fn mount_collection(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/", resource)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a bare status on `GET /{resource}/`.
pub async fn mount_status(server: &MockServer, resource: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{}/", resource)))
        .respond_with(ResponseTemplate::new(status).set_body_string("boom"))
        .mount(server)
        .await;
}

/// Server answering with the sample catalog on both endpoints.
pub async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    mount_collection(&server, "categories", sample_categories()).await;
    mount_collection(&server, "items", sample_items()).await;
    server
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri()).with_timeout(Duration::from_secs(2))
}

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::from_config(&config_for(server)).expect("valid test config")
}

pub fn client_with_mode(server: &MockServer, mode: FetchMode) -> CatalogClient {
    CatalogClient::from_config(&config_for(server).with_fetch_mode(mode))
        .expect("valid test config")
}

/// Rows of the test backend's buffer as plain strings.
pub fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
