//! Unified error type for the conversion adapter.
//!
//! All process-execution and output-validation failures are consolidated
//! into a single `ConversionError` enum that maps cleanly to
//! `stepview_core::error::AppError`.

use std::path::PathBuf;

use thiserror::Error;

use stepview_core::error::AppError;

/// Errors from invoking the external conversion tool.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The conversion command was not found on the system.
    #[error("Conversion command not found: {0}")]
    CommandNotFound(String),

    /// The conversion process timed out.
    #[error("Conversion timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// The conversion process exited with a non-zero status.
    #[error("Converter exited with code {code}: {stderr}")]
    ProcessFailed {
        /// The exit code.
        code: i32,
        /// Captured stderr output.
        stderr: String,
    },

    /// The conversion process was killed or terminated by signal.
    #[error("Converter process was killed (signal termination)")]
    Killed,

    /// Output file was not created after successful process exit.
    #[error("Output file not created: {path}")]
    OutputNotCreated {
        /// Expected output path.
        path: PathBuf,
    },

    /// Output file is empty (0 bytes) — the converter failed silently.
    #[error("Output file is empty (0 bytes): {path}")]
    OutputEmpty {
        /// Path to the empty output file.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match &err {
            ConversionError::CommandNotFound(_) => AppError::configuration(err.to_string()),
            _ => AppError::conversion(err.to_string()),
        }
    }
}
