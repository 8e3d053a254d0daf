//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use stepview_core::config::AppConfig;
use stepview_core::traits::ModelConverter;
use stepview_storage::UploadStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Upload directory store.
    pub store: Arc<UploadStore>,
    /// CAD model converter.
    pub converter: Arc<dyn ModelConverter>,
}
