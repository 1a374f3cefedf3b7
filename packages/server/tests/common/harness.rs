//! Test harness for driving the HTTP API in-process.
//!
//! Requests go straight through the router with `oneshot`, so no socket is
//! bound and no peer address is known. `Config::default()` leaves rate
//! limiting off; a harness that turns it on must send `X-Forwarded-For`,
//! since the limiter cannot key a request without a client address.

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pii_core::kernel::ServerDeps;
use pii_core::server::build_app;
use pii_core::Config;
use serde_json::Value;
use test_context::AsyncTestContext;
use tower::ServiceExt;

const MULTIPART_BOUNDARY: &str = "pii-shield-test-boundary";

/// Status and decoded JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test harness wrapping a fully layered application router.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let res = ctx.get("/health").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub config: Config,
    app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Router is dropped with the harness
    }
}

impl TestHarness {
    /// Harness with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = ServerDeps::from_config(&config);
        let app = build_app(&config, deps).context("Failed to build application")?;
        Ok(Self { config, app })
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.post_raw(uri, "application/json", body.to_string().into_bytes())
            .await
    }

    /// POST JSON as if relayed by a proxy for `client_ip`
    pub async fn post_json_from(&self, uri: &str, client_ip: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", client_ip)
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    /// POST a multipart form with a single file field
    pub async fn post_file(
        &self,
        uri: &str,
        field: &str,
        filename: &str,
        contents: &[u8],
    ) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

        let content_type = format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY);
        self.post_raw(uri, &content_type, body).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }
}

impl TestResponse {
    /// Entity type names in response order
    pub fn entity_types(&self) -> Vec<String> {
        self.body["entities"]
            .as_array()
            .map(|entities| {
                entities
                    .iter()
                    .filter_map(|e| e["entity"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First entity of the given type
    pub fn entity(&self, entity_type: &str) -> Option<&Value> {
        self.body["entities"]
            .as_array()?
            .iter()
            .find(|e| e["entity"] == entity_type)
    }
}
