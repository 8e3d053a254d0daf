//! Upload handler: receive file, validate, persist, convert, respond.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;

use stepview_core::error::AppError;
use stepview_storage::naming;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /upload — multipart upload of a single STEP file.
///
/// On success both the original and the converted glTF file are present
/// in the upload directory and the response carries the glTF filename.
/// A conversion failure leaves the uploaded file in place.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name = file_name.ok_or_else(|| AppError::validation("No file in request"))?;
    let data = data.ok_or_else(|| AppError::validation("No file in request"))?;

    naming::sanitize_file_name(&file_name)?;
    if !naming::is_allowed(&file_name, &state.config.storage.allowed_extensions) {
        return Err(AppError::unsupported_media(format!(
            "File type not allowed: {file_name}"
        ))
        .into());
    }

    let output_name = naming::converted_file_name(&file_name)
        .ok_or_else(|| AppError::unsupported_media(format!("No extension: {file_name}")))?;

    let source = state.store.write(&file_name, data).await?;
    let target = state.store.local_path(&output_name)?;

    state
        .converter
        .convert(&source, &target, state.config.conversion.embed)
        .await?;

    tracing::info!(file = %file_name, output = %output_name, "Upload converted");

    Ok(Json(UploadResponse::ok(output_name)))
}
