//! # stepview-storage
//!
//! Filesystem-backed upload store for StepView. The upload directory is
//! the only persistent state in the system: uploaded STEP files and
//! generated glTF files are stored side by side in a single flat
//! directory, and listings are recomputed from the directory on every
//! request.

pub mod naming;
pub mod store;

pub use store::UploadStore;
