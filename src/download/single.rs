//! Single resource fetching.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::EcodadysApi;
use crate::error::{Error, Result};
use crate::fs::destination_path;

/// Download one resource URL into `folder`.
///
/// The file name is the URL's final path segment; an existing file with the
/// same name is truncated and overwritten. The directory creation is
/// idempotent and safe to race with sibling tasks. On failure a partially
/// written file may remain on disk; no cleanup is attempted.
pub async fn fetch_one(api: &EcodadysApi, url: &str, folder: &Path) -> Result<PathBuf> {
    let output_path = destination_path(folder, url);

    tokio::fs::create_dir_all(folder).await?;

    let response = api.download_file(url).await?;

    let mut file = File::create(&output_path).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(output_path)
}
