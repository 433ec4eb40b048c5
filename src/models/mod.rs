//! Data models for generated metadata and the results built from it

use serde::{Deserialize, Serialize};

/// Metadata produced for one file by a single generator call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Generated metadata tagged with an identity and the file it came from.
///
/// `id` and `filename` never change after creation; edits and regeneration
/// only replace the metadata fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl ResultItem {
    pub fn new(id: String, filename: String, metadata: GeneratedMetadata) -> Self {
        Self {
            id,
            filename,
            title: metadata.title,
            description: metadata.description,
            keywords: metadata.keywords,
        }
    }

    /// Replace the metadata fields, keeping identity
    pub fn apply(&mut self, metadata: GeneratedMetadata) {
        self.title = metadata.title;
        self.description = metadata.description;
        self.keywords = metadata.keywords;
    }
}

/// Partial edit of a result's metadata. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// A single copyable field of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultField {
    Title,
    Description,
    Keywords,
}
