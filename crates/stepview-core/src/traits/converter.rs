//! The CAD model conversion seam.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::result::AppResult;

/// Converts a CAD model file into a glTF scene file.
///
/// The HTTP layer depends on this trait rather than on the concrete
/// external tool, so tests can substitute a mock implementation.
#[async_trait]
pub trait ModelConverter: fmt::Debug + Send + Sync {
    /// Convert `source` into a glTF file written at `target`.
    ///
    /// `embed` controls whether binary buffer data is inlined into the
    /// output file or referenced externally. The target file must exist
    /// and be non-empty on success.
    async fn convert(&self, source: &Path, target: &Path, embed: bool) -> AppResult<()>;
}
