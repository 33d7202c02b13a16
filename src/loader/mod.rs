//! Catalog loading
//!
//! Reads the plain-text video list the player is started with.

mod videos;

pub use videos::parse_catalog_str;

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a catalog from a video list file
///
/// # Arguments
/// * `path` - Path to the video list (typically videos.txt)
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video list from {:?}", path);

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read video list: {:?}", path))?;

    Ok(parse_catalog_str(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_catalog_from_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("videos.txt");
        fs::write(&path, "Amazing Cats | amazing_cats | cat, animal\n").unwrap();

        let catalog = parse_catalog(&path).unwrap();
        assert_eq!(catalog.video_count(), 1);
        assert!(catalog.get_video("amazing_cats").is_some());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let err = parse_catalog(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read video list"));
    }
}
