//! Filename policy: sanitization, extension extraction, and derivation
//! of the converted output name.

use stepview_core::error::AppError;
use stepview_core::result::AppResult;

/// Extension of the files the converter produces.
pub const OUTPUT_EXTENSION: &str = "gltf";

/// Validate a client-supplied filename for storage under the upload
/// directory.
///
/// Filenames are stored verbatim as single path components, so anything
/// that could address a different directory is rejected: path
/// separators, NUL bytes, and the `.`/`..` entries.
pub fn sanitize_file_name(name: &str) -> AppResult<&str> {
    if name.is_empty() {
        return Err(AppError::validation("Filename is empty"));
    }
    if name == "." || name == ".." {
        return Err(AppError::validation(format!("Invalid filename: {name}")));
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(AppError::validation(format!(
            "Filename contains forbidden characters: {name}"
        )));
    }
    Ok(name)
}

/// Extract the upload extension: the token after the first `.`.
///
/// `part.STEP` has extension `STEP`, and so does `part.STEP.bak`.
/// Returns `None` when the name contains no `.`.
pub fn upload_extension(name: &str) -> Option<&str> {
    let mut tokens = name.splitn(3, '.');
    tokens.next()?;
    tokens.next()
}

/// Check a filename against the configured extension allow-list.
///
/// The comparison is case-sensitive; a name with no extension is never
/// allowed.
pub fn is_allowed(name: &str, allowed: &[String]) -> bool {
    match upload_extension(name) {
        Some(ext) => allowed.iter().any(|a| a == ext),
        None => false,
    }
}

/// Derive the converted output filename from an upload filename.
///
/// The derivation is extension-only: the stem before the first `.` plus
/// `.gltf`. Returns `None` when the name has no extension to replace.
pub fn converted_file_name(name: &str) -> Option<String> {
    upload_extension(name)?;
    let stem = name.split('.').next()?;
    Some(format!("{stem}.{OUTPUT_EXTENSION}"))
}
