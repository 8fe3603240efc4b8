//! File system helpers.

pub mod naming;

pub use naming::{destination_path, file_name_from_url};
