//! # stepview-converter
//!
//! Adapter around the external STEP-to-glTF conversion tool. The tool
//! itself is opaque: this crate spawns it as a child process with
//! templated arguments, bounds it with a timeout, and validates that an
//! output file was actually produced. Every failure surfaces as a
//! [`ConversionError`], never as a panic or an escaped fault.

pub mod error;
pub mod executor;
pub mod gltf;

pub use error::ConversionError;
pub use gltf::GltfConverter;
