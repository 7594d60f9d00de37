// ABOUTME: Source module for the reveal-search application
// ABOUTME: Discovers markdown presentations and turns each file into documents

use crate::document::Document;
use crate::errors::{Result, SearchError};
use crate::extract::{extract_documents, Separators};
use crate::utils;
use log::{debug, error, info, warn};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// One markdown presentation and the prefix its documents are named with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub prefix: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, prefix_from_folder: bool) -> Self {
        let path = path.into();
        let prefix = if prefix_from_folder {
            utils::parent_folder_name(&path)
        } else {
            String::new()
        };
        Self { path, prefix }
    }
}

/// Find the presentations under `root`.
///
/// A file root is taken as the only source whatever its extension. A directory
/// root is searched recursively for `*.md` files, returned in sorted order.
pub fn discover_sources(root: &Path, prefix_from_folder: bool) -> Result<Vec<SourceFile>> {
    utils::validate_source_exists(root)?;

    if root.is_file() {
        return Ok(vec![SourceFile::new(root, prefix_from_folder)]);
    }

    let glob_pattern = format!(
        "{}/**/*.md",
        glob::Pattern::escape(&root.to_string_lossy())
    );
    debug!("Searching for presentations with {}", glob_pattern);

    let mut paths = Vec::new();
    for entry in glob::glob(&glob_pattern)? {
        match entry {
            Ok(path) if path.is_file() && utils::is_markdown(&path) => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry {:?}: {}", e.path(), e.error()),
        }
    }
    paths.sort();

    info!("Found {} markdown file(s) in {:?}", paths.len(), root);
    Ok(paths
        .into_iter()
        .map(|path| SourceFile::new(path, prefix_from_folder))
        .collect())
}

/// Read one presentation and extract its documents.
pub fn load_documents(source: &SourceFile, separators: &Separators) -> Result<Vec<Document>> {
    let bytes = fs::read(&source.path).map_err(SearchError::FileReadError)?;

    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(
            "{:?} is not valid UTF-8, invalid sequences were replaced",
            source.path
        );
    }

    let documents = extract_documents(&source.prefix, &text, separators);
    info!(
        "{} objects found in {}",
        documents.len(),
        source
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
    );
    Ok(documents)
}

/// Documents gathered from many sources, plus the sources that failed.
#[derive(Debug, Default)]
pub struct Collection {
    pub documents: Vec<Document>,
    pub failures: Vec<(PathBuf, SearchError)>,
    pub processed: usize,
}

impl Collection {
    /// True when there were sources and none of them could be read.
    pub fn all_failed(&self) -> bool {
        self.processed > 0 && self.failures.len() == self.processed
    }
}

/// Extract every source in order; a failing file is logged and skipped.
pub fn collect_documents(sources: &[SourceFile], separators: &Separators) -> Collection {
    let mut collection = Collection::default();

    for source in sources {
        collection.processed += 1;
        match load_documents(source, separators) {
            Ok(documents) => collection.documents.extend(documents),
            Err(e) => {
                error!("Failed to process {:?}: {}", source.path, e);
                collection.failures.push((source.path.clone(), e));
            }
        }
    }

    collection
}
