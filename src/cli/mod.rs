//! Command-line interface components
//!
//! Argument parsing and the top-level runner that turns resolved
//! configuration into dataset jobs.

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::handle_setup;
