//! Concurrent download dispatch.

use std::sync::Arc;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::api::EcodadysApi;
use crate::config::Config;
use crate::download::single::fetch_one;
use crate::error::Result;

/// Outcome totals for one download run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadStats {
    pub completed: u64,
    pub failed: u64,
}

impl DownloadStats {
    pub fn total(&self) -> u64 {
        self.completed + self.failed
    }
}

/// Download every URL into the configured output directory and wait for all
/// of them to finish.
///
/// One task is spawned per URL. When a concurrency cap is configured each
/// task holds a semaphore permit for its duration; without a cap all tasks
/// run at once. A failing download is logged with its URL and counted, and
/// never cancels or delays its siblings beyond the final join.
pub async fn download_all(
    api: Arc<EcodadysApi>,
    config: &Config,
    urls: Vec<String>,
) -> Result<DownloadStats> {
    let mut stats = DownloadStats::default();
    if urls.is_empty() {
        return Ok(stats);
    }

    // Created up front so a failure aborts the run once instead of
    // surfacing from every task. Each task re-creates it anyway, which is
    // idempotent.
    tokio::fs::create_dir_all(&config.output_directory).await?;

    let semaphore = config
        .concurrency
        .map(|n| Arc::new(Semaphore::new(n.get())));

    let progress = ProgressBar::new(urls.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut tasks = JoinSet::new();
    for url in urls {
        let api = Arc::clone(&api);
        let folder = config.output_directory.clone();
        let semaphore = semaphore.clone();

        tasks.spawn(async move {
            let _permit = match semaphore {
                // The semaphore is never closed while tasks are running.
                Some(s) => Some(s.acquire_owned().await.expect("semaphore closed")),
                None => None,
            };
            let outcome = fetch_one(&api, &url, &folder).await;
            (url, outcome)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(path))) => {
                stats.completed += 1;
                progress.println(format!(
                    "{} Downloaded: {}",
                    style("OK").green().bold(),
                    path.display()
                ));
            }
            Ok((url, Err(e))) => {
                stats.failed += 1;
                progress.println(format!(
                    "{} {}: {}",
                    style("FAILED").red().bold(),
                    url,
                    e
                ));
            }
            Err(e) => {
                stats.failed += 1;
                tracing::error!("Download task panicked: {}", e);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(stats)
}
