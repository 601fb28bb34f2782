//! PDF content extractor.
//!
//! Pages are read one at a time, in order. Each page yields a list of text
//! items; items are joined with single spaces and page texts are concatenated
//! with no separator.

use async_trait::async_trait;
use docsift_core::{mime, ExtractError, TextExtractor};
use lopdf::Document;
use std::sync::Arc;
use tracing::debug;

/// A parsed PDF document as seen by the extractor.
#[async_trait]
pub trait PdfSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Text items of a page, numbered from 1.
    async fn text_items(&self, page_number: u32) -> Result<Vec<String>, ExtractError>;
}

/// Concatenate the text of every page of `source`, in page order.
pub async fn collect_text<S: PdfSource + ?Sized>(source: &S) -> Result<String, ExtractError> {
    let mut text = String::new();
    for page_number in 1..=source.page_count() {
        let items = source.text_items(page_number).await?;
        text.push_str(&items.join(" "));
    }
    Ok(text)
}

/// [`PdfSource`] backed by `lopdf`.
pub struct LopdfSource {
    doc: Arc<Document>,
    page_count: u32,
}

impl LopdfSource {
    /// Parse a PDF from memory.
    pub async fn load(data: Vec<u8>) -> Result<Self, ExtractError> {
        let doc = tokio::task::spawn_blocking(move || Document::load_mem(&data))
            .await
            .map_err(|e| ExtractError::Failed(format!("Task join error: {e}")))?
            .map_err(|e| ExtractError::Corrupt(format!("PDF parse failed: {e}")))?;

        let page_count = u32::try_from(doc.get_pages().len())
            .map_err(|_| ExtractError::Corrupt("too many pages".to_string()))?;

        Ok(Self {
            doc: Arc::new(doc),
            page_count,
        })
    }
}

#[async_trait]
impl PdfSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    async fn text_items(&self, page_number: u32) -> Result<Vec<String>, ExtractError> {
        let doc = Arc::clone(&self.doc);
        let text = tokio::task::spawn_blocking(move || doc.extract_text(&[page_number]))
            .await
            .map_err(|e| ExtractError::Failed(format!("Task join error: {e}")))?
            .map_err(|e| {
                ExtractError::Corrupt(format!("failed to read text of page {page_number}: {e}"))
            })?;

        Ok(split_text_items(&text))
    }
}

/// Split decoded page text into items, one per non-blank line.
fn split_text_items(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Extractor for PDF files.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    fn supported_types(&self) -> &[&str] {
        &[mime::PDF]
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        let source = LopdfSource::load(data.to_vec()).await?;
        debug!("Extracting PDF text from {} pages", source.page_count());
        collect_text(&source).await
    }
}
