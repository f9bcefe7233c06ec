//! Run configuration for the OSF fetcher
//!
//! Options are resolved once at startup - environment variable defaults
//! first, then command-line flags on top - into an immutable [`Config`]
//! that is threaded through the pipeline. Components never read the
//! environment themselves.

use std::env;

use crate::cli::Cli;
use crate::constants;

/// Resolved run options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Store downloaded archives under `env/raw` instead of the working directory
    pub raw_zip: bool,
    /// Extract documentation and license files
    pub docs: bool,
    /// Run the two dataset jobs concurrently
    pub multiprocess: bool,
}

impl Config {
    /// Resolve configuration from the environment, then apply CLI flags.
    ///
    /// Flags only ever tighten in one direction (a present flag switches
    /// its option on, or off for `--no-docs`), so an absent flag leaves
    /// the environment default in place.
    pub fn resolve(cli: &Cli) -> Self {
        let mut config = Self::from_env();
        if cli.raw_zip {
            config.raw_zip = true;
        }
        if cli.no_docs {
            config.docs = false;
        }
        if cli.multiprocess {
            config.multiprocess = true;
        }
        config
    }

    /// Read the environment-variable defaults
    pub fn from_env() -> Self {
        Self {
            raw_zip: env_flag(constants::env::RAW_ZIP, false),
            docs: env_flag(constants::env::DOCS, true),
            multiprocess: env_flag(constants::env::MULTIPROCESS, false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_zip: false,
            docs: true,
            multiprocess: false,
        }
    }
}

/// Check a boolean environment variable.
///
/// Returns `default` when the variable is unset; otherwise the value must
/// be one of the recognized truthy forms to count as true.
fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => is_truthy(&value),
        Err(_) => default,
    }
}

/// Recognized truthy string forms, case-insensitive
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "true" | "t" | "yes" | "y" | "1"
    )
}
