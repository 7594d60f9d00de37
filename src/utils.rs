// ABOUTME: Utility functions for the reveal-search application
// ABOUTME: Provides path validation and directory helpers shared by the pipeline

use crate::errors::{Result, SearchError};
use std::path::Path;

/// Validate that a source path exists and is a file or a directory
pub fn validate_source_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SearchError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() && !path.is_dir() {
        return Err(SearchError::ValidationError(format!(
            "Source is neither a file nor a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(SearchError::FileReadError)?;
    } else if !path.is_dir() {
        return Err(SearchError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Name of the folder directly containing `path`, or empty at the filesystem root
pub fn parent_folder_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Whether the path carries a `.md` extension
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}
