//! Download module: per-file fetching and concurrent dispatch.

pub mod dispatcher;
pub mod single;

pub use dispatcher::{download_all, DownloadStats};
pub use single::fetch_one;
