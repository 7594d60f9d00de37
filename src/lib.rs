// ABOUTME: Library module for the reveal-search program.
// ABOUTME: Contains the slide extractor and the pipeline feeding it markdown files.

// Reexport modules
pub mod config;
pub mod document;
pub mod errors;
pub mod extract;
pub mod source;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use document::{BatchAction, BatchRequest, Document, batch_requests};
pub use errors::{Result, SearchError};
pub use extract::{Separators, extract_documents};
pub use source::{Collection, SourceFile, collect_documents, discover_sources, load_documents};

#[cfg(test)]
mod tests;
