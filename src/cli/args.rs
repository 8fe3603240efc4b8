//! Command-line argument definitions using clap.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::config::{Config, DEFAULT_API_ORIGIN, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_DIRECTORY};
use crate::error::{Error, Result};

/// Ecodadys media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "ecodadys-downloader",
    version,
    about = "Download the image and video library of an Ecodadys account",
    long_about = "Logs into an Ecodadys account with interactive credentials, lists the\n\
                  account's image and video resources, and downloads them concurrently."
)]
pub struct Args {
    /// Base origin of the Ecodadys API.
    #[arg(long, env = "ECODADYS_API_ORIGIN", default_value = DEFAULT_API_ORIGIN)]
    pub api_origin: String,

    /// Directory to write downloaded files into.
    #[arg(short = 'd', long = "directory", default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output_directory: PathBuf,

    /// Maximum simultaneous downloads; 0 removes the cap entirely.
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the runtime configuration from the parsed arguments.
    pub fn into_config(self) -> Result<Config> {
        let api_origin = Url::parse(&self.api_origin)
            .map_err(|e| Error::Config(format!("Invalid API origin '{}': {}", self.api_origin, e)))?;

        Ok(Config {
            api_origin,
            output_directory: self.output_directory,
            concurrency: NonZeroUsize::new(self.concurrency),
        })
    }
}
