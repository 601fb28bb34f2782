//! Session state.
//!
//! A [`Session`] is created when the user starts working and is changed only
//! by the four user actions: uploading files, typing a keyword, extracting,
//! and changing page. Everything displayed is derived from it on demand.

use docsift_core::{ExtractedDocument, UploadError, UploadedFile};
use docsift_search::{filter_sentences, PageState};
use serde::Serialize;
use tracing::{debug, info};

use crate::orchestrator::Orchestrator;
use crate::upload::filter_accepted_files;

/// One displayed row: a file and its sentences matching the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow<'a> {
    /// File name
    pub name: &'a str,
    /// Extraction outcome label
    pub status: &'static str,
    /// Matching fragments, in text order
    pub sentences: Vec<&'a str>,
}

/// Per-user state of the upload → extract → search flow.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current upload batch
    uploaded: Vec<UploadedFile>,
    /// Name shown as the upload status
    upload_status: Option<String>,
    /// Current search keyword
    keyword: String,
    /// Documents from the last extraction
    documents: Vec<ExtractedDocument>,
    /// Pagination over `documents`
    page: PageState,
}

impl Session {
    /// Create a session showing `items_per_page` rows per page.
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self {
            page: PageState::new(items_per_page),
            ..Self::default()
        }
    }

    /// Stage a new upload batch.
    ///
    /// Files with an unaccepted MIME type are dropped. If none remain, the
    /// session is left exactly as it was and [`UploadError::InvalidUploadType`]
    /// is returned. Otherwise the accepted files replace the previous batch,
    /// extracted documents are cleared, and the number of staged files is
    /// returned.
    pub fn upload(&mut self, candidates: Vec<UploadedFile>) -> Result<usize, UploadError> {
        let offered = candidates.len();
        let accepted = filter_accepted_files(candidates);
        if accepted.is_empty() {
            info!("Rejected upload of {} files: no accepted type", offered);
            return Err(UploadError::InvalidUploadType);
        }

        info!("Staged {} of {} files", accepted.len(), offered);
        self.upload_status = accepted.first().map(|file| file.name.clone());
        self.uploaded = accepted;
        self.documents.clear();
        self.page.clamp(0);
        Ok(self.uploaded.len())
    }

    /// Replace the search keyword. Takes effect on the next render.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        debug!("Keyword set to {:?}", self.keyword);
    }

    /// Extract the current batch, replacing all previous documents.
    ///
    /// The current page is kept where possible and clamped into the new range.
    pub async fn extract(&mut self, orchestrator: &Orchestrator) -> &[ExtractedDocument] {
        self.documents = orchestrator.extract_all(&self.uploaded).await;
        self.page.clamp(self.documents.len());
        &self.documents
    }

    /// Advance one page.
    pub fn next_page(&mut self) -> usize {
        self.page.next(self.documents.len())
    }

    /// Go back one page.
    pub fn previous_page(&mut self) -> usize {
        self.page.previous()
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page.go_to(page, self.documents.len())
    }

    /// Name of the first file of the current batch, if any.
    #[must_use]
    pub fn upload_status(&self) -> Option<&str> {
        self.upload_status.as_deref()
    }

    /// Files of the current batch.
    #[must_use]
    pub fn uploaded_files(&self) -> &[UploadedFile] {
        &self.uploaded
    }

    /// Documents from the last extraction.
    #[must_use]
    pub fn documents(&self) -> &[ExtractedDocument] {
        &self.documents
    }

    /// Current keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// Number of pages of documents, `0` when there are none.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.documents.len())
    }

    /// Whether page navigation is shown.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.page.controls_visible(self.documents.len())
    }

    /// Rows of the current page with the keyword applied.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<ResultRow<'_>> {
        self.page
            .slice(&self.documents)
            .iter()
            .map(|doc| ResultRow {
                name: &doc.name,
                status: doc.outcome.label(),
                sentences: filter_sentences(doc.text(), &self.keyword),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_core::{mime, ExtractOutcome};
    use docsift_extract::ExtractorRegistry;
    use std::sync::Arc;

    fn file(name: &str, mime_type: &str) -> UploadedFile {
        UploadedFile::new(name, mime_type, Vec::new())
    }

    fn word_files(count: usize) -> Vec<UploadedFile> {
        (1..=count)
            .map(|i| file(&format!("doc{i}.doc"), mime::MSWORD))
            .collect()
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(Arc::new(ExtractorRegistry::with_defaults()))
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(5);
        assert!(session.uploaded_files().is_empty());
        assert!(session.documents().is_empty());
        assert_eq!(session.upload_status(), None);
        assert_eq!(session.keyword(), "");
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_pages(), 0);
        assert!(!session.controls_visible());
        assert!(session.visible_rows().is_empty());
    }

    #[test]
    fn test_upload_keeps_accepted_and_reports_first_name() {
        let mut session = Session::default();
        let staged = session
            .upload(vec![
                file("notes.txt", "text/plain"),
                file("a.pdf", mime::PDF),
                file("b.xlsx", mime::XLSX),
            ])
            .unwrap();

        assert_eq!(staged, 2);
        assert_eq!(session.upload_status(), Some("a.pdf"));
        let names: Vec<&str> = session
            .uploaded_files()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.xlsx"]);
    }

    #[test]
    fn test_upload_replaces_previous_batch() {
        let mut session = Session::default();
        session.upload(vec![file("old.pdf", mime::PDF)]).unwrap();
        session
            .upload(vec![file("new.doc", mime::MSWORD), file("skip.png", "image/png")])
            .unwrap();

        assert_eq!(session.uploaded_files().len(), 1);
        assert_eq!(session.uploaded_files()[0].name, "new.doc");
        assert_eq!(session.upload_status(), Some("new.doc"));
    }

    #[tokio::test]
    async fn test_rejected_upload_leaves_session_unchanged() {
        let mut session = Session::default();
        session.upload(vec![file("keep.doc", mime::MSWORD)]).unwrap();
        session.extract(&orchestrator()).await;
        assert_eq!(session.documents().len(), 1);

        let err = session
            .upload(vec![file("a.txt", "text/plain"), file("b.png", "image/png")])
            .unwrap_err();

        assert_eq!(err, UploadError::InvalidUploadType);
        assert_eq!(session.uploaded_files().len(), 1);
        assert_eq!(session.uploaded_files()[0].name, "keep.doc");
        assert_eq!(session.upload_status(), Some("keep.doc"));
        assert_eq!(session.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_new_upload_clears_documents() {
        let mut session = Session::default();
        session.upload(vec![file("a.doc", mime::MSWORD)]).unwrap();
        session.extract(&orchestrator()).await;
        assert_eq!(session.documents().len(), 1);

        session.upload(vec![file("b.doc", mime::MSWORD)]).unwrap();

        assert!(session.documents().is_empty());
        assert!(session.visible_rows().is_empty());
    }

    #[tokio::test]
    async fn test_extract_replaces_documents() {
        let mut session = Session::default();
        session.upload(word_files(2)).unwrap();
        let documents = session.extract(&orchestrator()).await;
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].outcome, ExtractOutcome::NotYetSupported);

        session.extract(&orchestrator()).await;
        assert_eq!(session.documents().len(), 2);
    }

    #[tokio::test]
    async fn test_extract_with_nothing_uploaded() {
        let mut session = Session::default();
        assert!(session.extract(&orchestrator()).await.is_empty());
    }

    #[tokio::test]
    async fn test_paging_through_documents() {
        let mut session = Session::new(5);
        session.upload(word_files(12)).unwrap();
        session.extract(&orchestrator()).await;

        assert_eq!(session.total_pages(), 3);
        assert!(session.controls_visible());

        let first: Vec<&str> = session.visible_rows().iter().map(|r| r.name).collect();
        assert_eq!(first, vec!["doc1.doc", "doc2.doc", "doc3.doc", "doc4.doc", "doc5.doc"]);

        assert_eq!(session.next_page(), 2);
        assert_eq!(session.next_page(), 3);
        assert_eq!(session.next_page(), 3);
        let last: Vec<&str> = session.visible_rows().iter().map(|r| r.name).collect();
        assert_eq!(last, vec!["doc11.doc", "doc12.doc"]);

        assert_eq!(session.previous_page(), 2);
        assert_eq!(session.go_to_page(0), 1);
        assert_eq!(session.go_to_page(42), 3);
    }

    #[tokio::test]
    async fn test_page_is_clamped_when_new_batch_is_smaller() {
        let mut session = Session::new(5);
        session.upload(word_files(12)).unwrap();
        session.extract(&orchestrator()).await;
        session.go_to_page(3);

        session.upload(word_files(6)).unwrap();
        assert_eq!(session.current_page(), 1);

        session.extract(&orchestrator()).await;
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_single_page_hides_controls() {
        let mut session = Session::new(5);
        session.upload(word_files(5)).unwrap();
        session.extract(&orchestrator()).await;

        assert_eq!(session.total_pages(), 1);
        assert!(!session.controls_visible());
    }

    #[test]
    fn test_visible_rows_apply_keyword_lazily() {
        let mut session = Session::new(5);
        session.documents = vec![
            ExtractedDocument::with_text("a.pdf", mime::PDF, "Hello world Foo."),
            ExtractedDocument::with_text("b.pdf", mime::PDF, "Nothing here. foo fighters"),
        ];

        session.set_keyword("foo");
        let rows = session.visible_rows();
        assert_eq!(rows[0].sentences, vec!["Hello world Foo"]);
        assert_eq!(rows[1].sentences, vec![" foo fighters"]);
        assert_eq!(rows[0].status, "ok");

        session.set_keyword("");
        let rows = session.visible_rows();
        assert_eq!(rows[0].sentences, vec!["Hello world Foo", ""]);
        assert_eq!(rows[1].sentences, vec!["Nothing here", " foo fighters"]);
    }
}
