//! Application constants for the OSF fetcher
//!
//! Centralizes the fixed OSF project identifiers, endpoint templates, and
//! environment layout names used throughout the application.

/// Environment variable names for run configuration
pub mod env {
    /// Store downloaded archives under the raw folder
    pub const RAW_ZIP: &str = "M2JQE_RAW_ZIP";

    /// Extract documentation and license files
    pub const DOCS: &str = "M2JQE_DOCS";

    /// Set up the two datasets concurrently
    pub const MULTIPROCESS: &str = "M2JQE_MULTIPROCESS";
}

/// OSF endpoints and the fixed dataset projects
pub mod osf {
    /// Base URL for zipped project downloads via osfstorage
    pub const STORAGE_BASE_URL: &str = "https://files.osf.io/v1/resources";

    /// Base URL for human-facing project pages
    pub const PROJECT_BASE_URL: &str = "https://osf.io";

    /// Five-character project code of the original study dataset
    pub const ORIGINAL_PROJECT: &str = "59shv";

    /// Local name of the original study dataset
    pub const ORIGINAL_NAME: &str = "original";

    /// Five-character project code of the expansion study dataset
    pub const EXPANSION_PROJECT: &str = "m2jqe";

    /// Local name of the expansion study dataset
    pub const EXPANSION_NAME: &str = "expansion";
}

/// Output directory layout
pub mod layout {
    /// Root of the extracted environment
    pub const OUTPUT_DIR: &str = "./env";

    /// Subdirectory holding downloaded archives when raw storage is enabled
    pub const RAW_SUBDIR: &str = "raw";

    /// Subdirectory holding extracted tabular data
    pub const DATA_SUBDIR: &str = "data";
}

/// File naming conventions
pub mod files {
    /// Archive entry name treated as a data license
    pub const LICENSE_ENTRY_NAME: &str = "license.txt";

    /// Name a data license is written out under (optionally prefixed)
    pub const LICENSE_OUTPUT_NAME: &str = "DATA-LICENSE";
}

/// HTTP client configuration constants
pub mod http {
    /// User agent for all HTTP requests
    pub const USER_AGENT: &str = "OSF-Fetcher/0.1.0 (Dataset Bootstrap Tool)";
}

// Re-export commonly used constants for convenience
pub use layout::OUTPUT_DIR;
pub use osf::{EXPANSION_PROJECT, ORIGINAL_PROJECT};
