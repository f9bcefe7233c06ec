//! Streaming download of a remote resource to a local file
//!
//! The only caching policy in the system lives here: if the destination
//! file already exists the transfer is skipped entirely. There are no
//! retries and no partial-file cleanup - a transfer that fails partway
//! may leave a partial file which a later run treats as complete. That
//! limitation is deliberate and documented rather than papered over.

use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::app::progress;
use crate::errors::{FetchError, FetchResult};

/// Download `url` to `destination`, reporting bytes-written progress.
///
/// `name` and `location` are display strings for progress output and
/// error messages; they do not affect the transfer.
///
/// # Errors
///
/// Returns [`FetchError::Failed`] on a non-success response, or the
/// underlying HTTP/I/O error. Callers are expected not to recover.
pub async fn fetch(
    client: &Client,
    destination: &Path,
    url: &Url,
    name: &str,
    location: &str,
) -> FetchResult<()> {
    if destination.exists() {
        debug!("{} already present, skipping download", destination.display());
        return Ok(());
    }

    println!("Downloading {name} from '{location}'.");

    let response = client.get(url.clone()).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Failed {
            name: name.to_string(),
            location: location.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bar = progress::download_bar(name, response.content_length());

    let mut file = File::create(destination).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        bar.inc(chunk.len() as u64);
    }
    file.flush().await?;
    bar.finish();

    debug!("downloaded {} to {}", name, destination.display());
    Ok(())
}
