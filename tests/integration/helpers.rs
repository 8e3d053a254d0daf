//! Shared test helpers for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use stepview_api::router::build_router;
use stepview_api::state::AppState;
use stepview_core::config::AppConfig;
use stepview_core::error::AppError;
use stepview_core::result::AppResult;
use stepview_core::traits::ModelConverter;
use stepview_storage::UploadStore;

/// Bytes the mock converter writes as its glTF output.
pub const MOCK_GLTF: &[u8] = br#"{"asset":{"version":"2.0"}}"#;

/// Converter double: writes a fixed glTF document, or fails on demand.
#[derive(Debug, Clone)]
pub struct MockConverter {
    fail: bool,
}

#[async_trait]
impl ModelConverter for MockConverter {
    async fn convert(&self, source: &Path, target: &Path, _embed: bool) -> AppResult<()> {
        if self.fail {
            return Err(AppError::conversion("mock converter failure"));
        }
        // Read the source like a real converter would, then emit the
        // canned document.
        tokio::fs::read(source).await?;
        tokio::fs::write(target, MOCK_GLTF).await?;
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The upload directory backing the store
    pub upload_dir: PathBuf,
    /// Temp directory holding the store; removed on drop
    _tmp: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with a converter that succeeds.
    pub async fn new() -> Self {
        Self::with_converter(MockConverter { fail: false }).await
    }

    /// Create a test application whose converter always fails.
    pub async fn new_failing() -> Self {
        Self::with_converter(MockConverter { fail: true }).await
    }

    async fn with_converter(converter: MockConverter) -> Self {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.storage.data_root = tmp.path().to_string_lossy().to_string();

        let store = Arc::new(
            UploadStore::open(&config.storage.data_root)
                .await
                .expect("Failed to open upload store"),
        );
        let upload_dir = store.root().to_path_buf();

        let state = AppState {
            config: Arc::new(config),
            store,
            converter: Arc::new(converter),
        };

        Self {
            router: build_router(state),
            upload_dir,
            _tmp: tmp,
        }
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Upload a file through the multipart endpoint
    pub async fn upload(&self, filename: &str, data: &[u8]) -> TestResponse {
        let boundary = "stepview-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST /upload with a multipart body that has no `file` field
    pub async fn upload_without_file_field(&self) -> TestResponse {
        let boundary = "stepview-test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );

        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_disposition = response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            bytes,
            content_disposition,
            content_type,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub bytes: Vec<u8>,
    /// Content-Disposition header, if present
    pub content_disposition: Option<String>,
    /// Content-Type header, if present
    pub content_type: Option<String>,
}

impl TestResponse {
    /// Parse the body as JSON, or `Null` if it isn't JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }
}
