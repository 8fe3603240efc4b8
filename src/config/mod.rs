//! Runtime configuration.
//!
//! The API origin is injected here rather than hard-coded in the client so
//! that tests can substitute a local mock server.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use url::Url;

/// Default API origin of the Ecodadys service.
pub const DEFAULT_API_ORIGIN: &str = "https://ecodadys.app";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "downloads";

/// Default cap on simultaneous downloads.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Runtime configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base origin of the Ecodadys API.
    pub api_origin: Url,

    /// Directory downloaded files are written into.
    pub output_directory: PathBuf,

    /// Maximum number of downloads in flight; `None` removes the cap and
    /// fans out one task per URL.
    pub concurrency: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // The default origin is a compile-time constant and always parses.
            api_origin: Url::parse(DEFAULT_API_ORIGIN).expect("default origin is valid"),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            concurrency: NonZeroUsize::new(DEFAULT_CONCURRENCY),
        }
    }
}
