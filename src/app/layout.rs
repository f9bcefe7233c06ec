//! Output directory layout
//!
//! All extracted files land under a single environment root: tabular data
//! under `data/`, documentation and renamed licenses at the root, and
//! downloaded archives under `raw/` when raw storage is requested.

use std::path::{Path, PathBuf};

use crate::constants::layout;

/// Paths of the extracted environment
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Create a layout rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root of the environment (documents and licenses land here)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding extracted tabular data
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(layout::DATA_SUBDIR)
    }

    /// Directory holding downloaded archives when raw storage is enabled
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(layout::RAW_SUBDIR)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(layout::OUTPUT_DIR)
    }
}
