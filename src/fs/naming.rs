//! Destination file name derivation.

use std::path::{Path, PathBuf};

/// Derive the destination file name from a resource URL.
///
/// The name is the text after the final `/`; a URL containing no `/` is
/// used whole. Two distinct URLs sharing a final segment map to the same
/// file, and the later download overwrites the earlier one.
pub fn file_name_from_url(url: &str) -> &str {
    match url.rsplit_once('/') {
        Some((_, name)) => name,
        None => url,
    }
}

/// Join the derived file name onto the output directory.
pub fn destination_path(folder: &Path, url: &str) -> PathBuf {
    folder.join(file_name_from_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_final_path_segment() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/a/b/photo123.jpg"),
            "photo123.jpg"
        );
    }

    #[test]
    fn name_without_slash_is_whole_url() {
        assert_eq!(file_name_from_url("photo123.jpg"), "photo123.jpg");
    }

    #[test]
    fn trailing_slash_yields_empty_name() {
        // Mirrors the naming scheme exactly; the later file creation fails
        // and is logged as a per-item error.
        assert_eq!(file_name_from_url("https://cdn.example.com/a/"), "");
    }

    #[test]
    fn colliding_segments_map_to_same_path() {
        let folder = Path::new("downloads");
        assert_eq!(
            destination_path(folder, "https://cdn-a.example.com/x/pic.jpg"),
            destination_path(folder, "https://cdn-b.example.com/y/pic.jpg"),
        );
    }
}
