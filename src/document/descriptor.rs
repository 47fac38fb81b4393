use super::DocumentError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Chapter metadata as stored in the `meta` object of a chapter file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Kept signed so out-of-range counts surface as planner errors
    pub sentence_count: i64,
}

/// Read-only view of a chapter file. Only `meta.sentenceCount` is consumed;
/// everything else in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentDescriptor {
    pub meta: DocumentMeta,
}

impl DocumentDescriptor {
    /// Load a descriptor from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading document descriptor");

        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let descriptor = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            sentence_count = descriptor.sentence_count(),
            "loaded document descriptor"
        );

        Ok(descriptor)
    }

    /// Parse a descriptor from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(text).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    pub fn sentence_count(&self) -> i64 {
        self.meta.sentence_count
    }
}
