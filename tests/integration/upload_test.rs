//! Integration tests for the upload-convert-store flow.

mod helpers;

use http::StatusCode;

const STEP_DATA: &[u8] = b"ISO-10303-21;\nHEADER;\nENDSEC;\nEND-ISO-10303-21;\n";

#[tokio::test]
async fn test_upload_step_success() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("part.STEP", STEP_DATA).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body.get("ok").unwrap().as_bool(), Some(true));
    assert_eq!(body.get("url").unwrap().as_str(), Some("part.gltf"));

    let stored = tokio::fs::read(app.upload_dir.join("part.STEP")).await.unwrap();
    assert_eq!(stored, STEP_DATA);

    let converted = tokio::fs::read(app.upload_dir.join("part.gltf")).await.unwrap();
    assert_eq!(converted, helpers::MOCK_GLTF);
}

#[tokio::test]
async fn test_upload_disallowed_extension() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("part.txt", b"not a model").await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response.json();
    assert_eq!(body.get("ok").unwrap().as_bool(), Some(false));
    assert!(!app.upload_dir.join("part.txt").exists());
}

#[tokio::test]
async fn test_upload_lowercase_extension_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("part.step", STEP_DATA).await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_upload_without_extension_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("partSTEP", STEP_DATA).await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(!app.upload_dir.join("partSTEP").exists());
}

#[tokio::test]
async fn test_upload_missing_file_field() {
    let app = helpers::TestApp::new().await;

    let response = app.upload_without_file_field().await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body.get("ok").unwrap().as_bool(), Some(false));

    let mut entries = tokio::fs::read_dir(&app.upload_dir).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}

#[tokio::test]
async fn test_upload_traversal_filename_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("../escape.STEP", STEP_DATA).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    // Nothing may land next to the upload directory.
    assert!(!app.upload_dir.parent().unwrap().join("escape.STEP").exists());
}

#[tokio::test]
async fn test_upload_conversion_failure_is_structured() {
    let app = helpers::TestApp::new_failing().await;

    let response = app.upload("part.STEP", STEP_DATA).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body.get("ok").unwrap().as_bool(), Some(false));
    assert_eq!(body.get("error").unwrap().as_str(), Some("CONVERSION_FAILED"));

    // The uploaded file stays in place; no output is produced.
    assert!(app.upload_dir.join("part.STEP").exists());
    assert!(!app.upload_dir.join("part.gltf").exists());
}

#[tokio::test]
async fn test_concurrent_uploads_of_same_name_do_not_crash() {
    let app = helpers::TestApp::new().await;

    // Same-name uploads race on the write and the conversion
    // (last-write-wins). Both requests must complete.
    let (a, b) = tokio::join!(
        app.upload("race.STEP", STEP_DATA),
        app.upload("race.STEP", STEP_DATA),
    );

    assert!(a.status.is_success());
    assert!(b.status.is_success());
    assert!(app.upload_dir.join("race.STEP").exists());
}
