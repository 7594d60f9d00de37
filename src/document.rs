// ABOUTME: Document module for the reveal-search application
// ABOUTME: Defines the per-slide search record and the batch payload shapes

use serde::{Deserialize, Serialize};

/// A single slide, flattened into a record ready for full-text indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// `<prefix>_<sequence>`, sequence being 1-based over the whole presentation.
    #[serde(rename = "objectID")]
    pub id: String,
    pub url: String,
    #[serde(rename = "h")]
    pub chapter_index: usize,
    #[serde(rename = "v")]
    pub slide_index: usize,
    /// Slide text exactly as split out of the source.
    pub content: String,
    #[serde(rename = "chapter")]
    pub chapter_title: String,
    pub keywords: Vec<String>,
    #[serde(rename = "img")]
    pub image: String,
}

/// The "add object" action wrapping one document in a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAction {
    pub action: String,
    pub body: Document,
}

impl BatchAction {
    pub fn add_object(document: Document) -> Self {
        Self {
            action: "addObject".to_string(),
            body: document,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub requests: Vec<BatchAction>,
}

/// Chunk documents into batch requests of at most `size` actions each.
///
/// Document order is preserved across and within batches. A size of zero is
/// treated as one.
pub fn batch_requests(documents: &[Document], size: usize) -> Vec<BatchRequest> {
    documents
        .chunks(size.max(1))
        .map(|chunk| BatchRequest {
            requests: chunk.iter().cloned().map(BatchAction::add_object).collect(),
        })
        .collect()
}
