//! Runner: directory preparation and dataset job execution
//!
//! Builds the fixed list of two dataset jobs and runs them either
//! sequentially or as two concurrent tasks. The jobs are fully
//! independent and write to disjoint subdirectories, so concurrent
//! execution needs no coordination beyond joining both at the end.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{error, info};

use crate::app::{setup_dataset, DatasetJob, Layout};
use crate::config::Config;
use crate::constants::{http, osf};
use crate::errors::{AppError, FetchError, Result};

/// Set up the environment: create the output directories and run both
/// dataset jobs.
///
/// Under `multiprocess` a failure in one job does not stop the other
/// from completing, but the run still fails with the first error.
pub async fn handle_setup(config: Config) -> Result<()> {
    let layout = Layout::default();
    fs::create_dir_all(layout.data_dir())?;

    let archive_dir = if config.raw_zip {
        let dir = layout.raw_dir();
        fs::create_dir_all(&dir)?;
        dir
    } else {
        PathBuf::from("./")
    };

    let client = build_client()?;
    let jobs = dataset_jobs(&config, &archive_dir);

    if config.multiprocess {
        info!("running {} dataset jobs concurrently", jobs.len());
        let mut handles = Vec::with_capacity(jobs.len());
        for job in jobs {
            let client = client.clone();
            let layout = layout.clone();
            handles.push(tokio::spawn(
                async move { setup_dataset(&client, job, layout).await },
            ));
        }
        let mut first_failure: Option<AppError> = None;
        for handle in handles {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("dataset setup failed ({}): {}", e.category(), e);
                    first_failure.get_or_insert(e);
                }
                Err(e) => {
                    first_failure.get_or_insert(AppError::Join(e));
                }
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    } else {
        for job in jobs {
            setup_dataset(&client, job, layout.clone()).await?;
        }
        Ok(())
    }
}

/// The two fixed dataset jobs, sharing the archive directory and the
/// documentation flag
fn dataset_jobs(config: &Config, archive_dir: &Path) -> Vec<DatasetJob> {
    vec![
        DatasetJob {
            project: osf::ORIGINAL_PROJECT.to_string(),
            name: osf::ORIGINAL_NAME.to_string(),
            archive_dir: archive_dir.to_path_buf(),
            docs: config.docs,
        },
        DatasetJob {
            project: osf::EXPANSION_PROJECT.to_string(),
            name: osf::EXPANSION_NAME.to_string(),
            archive_dir: archive_dir.to_path_buf(),
            docs: config.docs,
        },
    ]
}

fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(http::USER_AGENT)
        .build()
        .map_err(|e| AppError::Fetch(FetchError::Http(e)))
}
