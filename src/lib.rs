//! Ecodadys Downloader - bulk download of an Ecodadys media library.
//!
//! This library logs into an Ecodadys account, lists the image and video
//! resources belonging to it, and downloads every resource concurrently
//! into a local directory.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ecodadys_downloader::{download_all, Config, EcodadysApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = Arc::new(EcodadysApi::new(config.api_origin.clone())?);
//!
//!     let session = api.login("me@example.com", "secret").await?;
//!     let mut urls = api.list_resources(&session, "images").await?;
//!     urls.extend(api.list_resources(&session, "videos").await?);
//!
//!     let stats = download_all(api, &config, urls).await?;
//!     println!("{} downloaded, {} failed", stats.completed, stats.failed);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{EcodadysApi, Session};
pub use config::Config;
pub use download::{download_all, fetch_one, DownloadStats};
pub use error::{Error, Result};
