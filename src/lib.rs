//! OSF Fetcher Library
//!
//! Downloads the two fixed study-dataset archives from OSF and extracts
//! them into a local `./env` working tree according to per-extension
//! placement rules. A one-shot bootstrap utility, not a service.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
