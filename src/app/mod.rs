//! Core download and extraction pipeline
//!
//! The pipeline is a straight line: fetch an archive, open it, route
//! every entry to a per-extension handler. Each dataset job runs it in
//! isolation; jobs touch disjoint output paths, so there is no shared
//! mutable state between them.

pub mod dataset;
pub mod extract;
pub mod fetch;
pub mod handlers;
pub mod layout;
pub mod progress;

pub use dataset::{setup_dataset, DatasetJob};
pub use extract::extract;
pub use fetch::fetch;
pub use handlers::{Handler, HandlerTable};
pub use layout::Layout;
