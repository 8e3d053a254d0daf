//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the upload and conversion succeeded.
    pub ok: bool,
    /// Name of the generated glTF file, servable via `/download/{url}`.
    pub url: String,
}

impl UploadResponse {
    /// Creates a successful upload response.
    pub fn ok(url: impl Into<String>) -> Self {
        Self {
            ok: true,
            url: url.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
