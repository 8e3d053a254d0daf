//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Upload storage configuration.
///
/// Uploaded STEP files and generated glTF files live side by side in a
/// single `upload/` directory under `data_root`, disambiguated only by
/// extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory under which the upload directory is created.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum upload size in bytes (default 1 GB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Upload filename extensions that are accepted, compared
    /// case-sensitively against the token after the first `.`.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_data_root() -> String {
    ".".to_string()
}

fn default_max_upload() -> u64 {
    1_073_741_824 // 1 GB
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["STEP".to_string()]
}
