//! Core traits for docsift components.
//!
//! - [`TextExtractor`]: Convert a raw file buffer into plain text

use async_trait::async_trait;

use crate::error::ExtractError;

/// Trait for extracting plain text from a file buffer.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Short name of this extractor.
    fn name(&self) -> &str;

    /// Returns the MIME types this extractor handles (exact match).
    fn supported_types(&self) -> &[&str];

    /// Check if this extractor handles the given MIME type.
    fn can_extract(&self, mime_type: &str) -> bool {
        self.supported_types().contains(&mime_type)
    }

    /// Whether this extractor only stands in for a format that is not parsed yet.
    fn is_placeholder(&self) -> bool {
        false
    }

    /// Extract text from the file content.
    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError>;
}
