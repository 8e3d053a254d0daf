//! # stepview-core
//!
//! Core crate for StepView. Contains configuration schemas, the
//! converter trait seam, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StepView crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
