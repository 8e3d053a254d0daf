//! # stepview-api
//!
//! HTTP API layer for StepView built on Axum.
//!
//! Provides the upload, listing, and download endpoints, middleware
//! (CORS, logging), DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
