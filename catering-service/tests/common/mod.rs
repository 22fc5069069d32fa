//! Shared setup for catering-service integration tests.
//!
//! Offline tests drive the router directly with a store that was never
//! connected. `TestApp` spawns the full server against a real MongoDB
//! (`TEST_DATABASE_URL`, default `mongodb://localhost:27017`) using a
//! throwaway database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use catering_service::config::{CateringConfig, DatabaseConfig};
use catering_service::services::DocumentStore;
use catering_service::startup::{build_router, AppState, Application};
use http_body_util::BodyExt;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_config(url: Option<&str>, name: Option<&str>) -> CateringConfig {
    CateringConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        database: DatabaseConfig {
            url: url.map(str::to_string),
            name: name.map(str::to_string),
            timeout_secs: 2,
        },
    }
}

/// Router whose store never connected.
pub fn offline_router() -> Router {
    offline_router_with(test_config(None, None))
}

pub fn offline_router_with(config: CateringConfig) -> Router {
    build_router(AppState {
        config,
        store: DocumentStore::unavailable("DATABASE_URL is not set"),
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: DocumentStore,
    pub db_name: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("catering_test_{}", Uuid::new_v4().simple());

        let config = test_config(Some(&url), Some(&db_name));
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        assert!(app.store().is_available(), "MongoDB store did not initialize");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            db_name,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn seed(&self) -> reqwest::Response {
        self.client
            .post(self.url("/seed"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "GET {} failed", path);
        response.json().await.expect("Failed to parse JSON")
    }

    /// Drop the throwaway database.
    pub async fn cleanup(&self) {
        if let Some(client) = self.store.client() {
            let _ = client.database(&self.db_name).drop(None).await;
        }
    }
}
