//! Integration tests for listing and download.

mod helpers;

use std::collections::HashSet;

use http::StatusCode;

const STEP_DATA: &[u8] = b"ISO-10303-21;\nHEADER;\nENDSEC;\nEND-ISO-10303-21;\n";

#[tokio::test]
async fn test_getlist_empty() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/getlist").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!([]));
}

#[tokio::test]
async fn test_getlist_reflects_directory_contents() {
    let app = helpers::TestApp::new().await;

    app.upload("a.STEP", STEP_DATA).await;
    app.upload("b.STEP", STEP_DATA).await;

    let response = app.get("/getlist").await;
    assert_eq!(response.status, StatusCode::OK);

    let names: HashSet<String> = response
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    let expected: HashSet<String> = ["a.STEP", "a.gltf", "b.STEP", "b.gltf"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_download_converted_file() {
    let app = helpers::TestApp::new().await;
    app.upload("part.STEP", STEP_DATA).await;

    let response = app.get("/download/part.gltf").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, helpers::MOCK_GLTF);
    assert_eq!(
        response.content_disposition.as_deref(),
        Some("attachment; filename=\"part.gltf\"")
    );
    assert_eq!(response.content_type.as_deref(), Some("model/gltf+json"));
}

#[tokio::test]
async fn test_download_original_file() {
    let app = helpers::TestApp::new().await;
    app.upload("part.STEP", STEP_DATA).await;

    let response = app.get("/download/part.STEP").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, STEP_DATA);
}

#[tokio::test]
async fn test_download_missing_file() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/download/doesnotexist.gltf").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body.get("ok").unwrap().as_bool(), Some(false));
    assert_eq!(body.get("error").unwrap().as_str(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_download_traversal_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/download/..%2Fconfig.toml").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json().get("status").unwrap().as_str(), Some("ok"));
}
