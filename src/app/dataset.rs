//! One full download-and-extract task for one named dataset
//!
//! Composes the fetcher, the handler table, and the archive dispatcher
//! into a single operation parameterized by an OSF project code, a local
//! name, an archive directory, and the documentation flag.

use std::path::PathBuf;

use reqwest::Client;
use tokio::task;
use tracing::info;
use url::Url;

use crate::app::extract::extract;
use crate::app::fetch::fetch;
use crate::app::handlers::HandlerTable;
use crate::app::layout::Layout;
use crate::constants::osf;
use crate::errors::{FetchError, Result};

/// One dataset setup task. Immutable once constructed; built by the
/// runner, consumed once here.
#[derive(Debug, Clone)]
pub struct DatasetJob {
    /// Five-character OSF project code
    pub project: String,
    /// Local name, used for file naming and license prefixing
    pub name: String,
    /// Directory the downloaded archive is stored in
    pub archive_dir: PathBuf,
    /// Whether documentation and licenses are extracted
    pub docs: bool,
}

/// Download and extract one dataset into the environment.
///
/// The archive lands at `<archive_dir>/<name>.zip` and is fetched from
/// the project's zipped osfstorage endpoint, skipping the transfer if
/// the archive file already exists. Extraction runs on a blocking
/// thread. Failures propagate unchanged; there is no local recovery.
pub async fn setup_dataset(client: &Client, job: DatasetJob, layout: Layout) -> Result<()> {
    let archive_path = job.archive_dir.join(format!("{}.zip", job.name));
    let url_text = format!(
        "{}/{}/providers/osfstorage/?zip=",
        osf::STORAGE_BASE_URL,
        job.project
    );
    let url = Url::parse(&url_text).map_err(|e| FetchError::InvalidUrl {
        url: url_text.clone(),
        error: e.to_string(),
    })?;
    let display_name = format!("{} Dataset", capitalize(&job.name));
    let location = format!("{}/{}/", osf::PROJECT_BASE_URL, job.project);

    fetch(client, &archive_path, &url, &display_name, &location).await?;

    let table = HandlerTable::for_dataset(&job.name, job.docs);
    task::spawn_blocking(move || extract(&archive_path, &table, &layout)).await??;

    info!("{} set up", display_name);
    Ok(())
}

/// Upper-case the first character, lower-case the rest
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
