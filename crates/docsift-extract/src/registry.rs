//! Extractor registry keyed by MIME type.

use docsift_core::{ExtractError, TextExtractor};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{PdfExtractor, SpreadsheetExtractor, WordExtractor};

/// Registry of text extractors.
pub struct ExtractorRegistry {
    /// Named extractors
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    /// MIME type to extractor name mapping
    mime_mapping: HashMap<String, String>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            mime_mapping: HashMap::new(),
        }
    }

    /// Create a registry with the PDF, spreadsheet and Word extractors.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("pdf", PdfExtractor::new());
        registry.register("spreadsheet", SpreadsheetExtractor::new());
        registry.register("word", WordExtractor::new());
        registry
    }

    /// Register an extractor under `name`, mapping all its MIME types to it.
    pub fn register<E: TextExtractor + 'static>(&mut self, name: &str, extractor: E) {
        let extractor = Arc::new(extractor);
        for mime in extractor.supported_types() {
            self.mime_mapping
                .insert((*mime).to_string(), name.to_string());
        }
        self.extractors.insert(name.to_string(), extractor);
    }

    /// Get the extractor for a MIME type.
    #[must_use]
    pub fn get_for_mime(&self, mime_type: &str) -> Option<Arc<dyn TextExtractor>> {
        self.mime_mapping
            .get(mime_type)
            .and_then(|name| self.extractors.get(name))
            .cloned()
    }

    /// Extract text from `data` with the extractor registered for `mime_type`.
    pub async fn extract(&self, mime_type: &str, data: &[u8]) -> Result<String, ExtractError> {
        let extractor = self
            .get_for_mime(mime_type)
            .ok_or_else(|| ExtractError::UnsupportedType(mime_type.to_string()))?;

        extractor.extract_bytes(data).await
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
