//! Listing and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tokio_util::io::ReaderStream;

use stepview_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /getlist — filenames currently present in the upload directory.
pub async fn get_list(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.store.list().await?;
    Ok(Json(names))
}

/// GET /download/{filename} — stream a stored file as an attachment.
///
/// The filename passes the same sanitizer as uploads before it touches
/// the filesystem.
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (file, len) = state.store.open_file(&filename).await?;
    let stream = ReaderStream::new(file);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_from_name(&filename))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CONTENT_LENGTH, len)
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Guess a MIME type from the trailing extension.
fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("gltf") => "model/gltf+json",
        Some("glb") => "model/gltf-binary",
        Some("step") | Some("stp") => "application/step",
        _ => "application/octet-stream",
    }
}
