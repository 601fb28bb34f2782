//! Word document extractor.
//!
//! `.doc` files are accepted at upload but their content is not parsed yet.
//! The extractor reports itself as a placeholder so callers can tell its empty
//! output apart from a document that really contains no text.

use async_trait::async_trait;
use docsift_core::{mime, ExtractError, TextExtractor};
use tracing::debug;

/// Placeholder extractor for legacy Word documents.
pub struct WordExtractor;

impl WordExtractor {
    /// Create a new Word extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for WordExtractor {
    fn name(&self) -> &str {
        "word"
    }

    fn supported_types(&self) -> &[&str] {
        &[mime::MSWORD]
    }

    fn is_placeholder(&self) -> bool {
        true
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        debug!("Word extraction not supported, ignoring {} bytes", data.len());
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        let extractor = WordExtractor::new();
        assert_eq!(extractor.supported_types(), &["application/msword"]);
        assert!(extractor.is_placeholder());
    }

    #[tokio::test]
    async fn test_extract_returns_empty_text() {
        let text = WordExtractor::default()
            .extract_bytes(b"Some words. More words.")
            .await
            .unwrap();
        assert!(text.is_empty());
    }
}
