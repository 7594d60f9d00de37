// ABOUTME: Configuration module for the reveal-search application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::errors::Result;
use crate::extract::Separators;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SEPARATOR: &str = "^\n\n\n";
pub const DEFAULT_VERTICAL_SEPARATOR: &str = "^\n\n";
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Global configuration for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File or directory holding the markdown presentations
    pub source: PathBuf,
    /// Use the name of each file's folder as id and URL prefix
    pub prefix_from_folder: bool,
    /// Chapter (horizontal) separator, before multi-line wrapping
    pub separator: String,
    /// Slide (vertical) separator, before multi-line wrapping
    pub vertical_separator: String,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            prefix_from_folder: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            vertical_separator: DEFAULT_VERTICAL_SEPARATOR.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let source = lookup("REVEAL_SOURCE")
            .map(PathBuf::from)
            .unwrap_or(defaults.source);
        let prefix_from_folder = lookup("REVEAL_PREFIX_FROM_FOLDER")
            .map(|s| {
                let s = s.trim().to_lowercase();
                s != "false" && s != "0"
            })
            .unwrap_or(defaults.prefix_from_folder);
        let separator = lookup("REVEAL_SEP").unwrap_or(defaults.separator);
        let vertical_separator =
            lookup("REVEAL_VERTICAL_SEP").unwrap_or(defaults.vertical_separator);
        let batch_size = lookup("REVEAL_BATCH_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.batch_size);

        Self {
            source,
            prefix_from_folder,
            separator,
            vertical_separator,
            batch_size,
        }
    }

    /// Apply command-line values on top of this configuration
    pub fn with_overrides(
        mut self,
        source: Option<PathBuf>,
        prefix_from_folder: bool,
        separator: Option<String>,
        vertical_separator: Option<String>,
        batch_size: Option<usize>,
    ) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        // A flag can only switch the prefix on
        self.prefix_from_folder |= prefix_from_folder;
        if let Some(separator) = separator {
            self.separator = separator;
        }
        if let Some(vertical_separator) = vertical_separator {
            self.vertical_separator = vertical_separator;
        }
        if let Some(batch_size) = batch_size.filter(|size| *size > 0) {
            self.batch_size = batch_size;
        }
        self
    }

    /// Compile the configured separators in multi-line mode
    pub fn separators(&self) -> Result<Separators> {
        Separators::new(&self.separator, &self.vertical_separator)
    }
}
