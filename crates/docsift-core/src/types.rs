//! Core types for docsift.
//!
//! ## Uploads
//! - [`UploadedFile`]: A named binary blob with its declared MIME type
//!
//! ## Extraction
//! - [`ExtractedDocument`]: Result of extracting one uploaded file
//! - [`ExtractOutcome`]: How extraction of that file ended
//! - [`UnregisteredPolicy`]: Handling of MIME types without an extractor

use bytes::Bytes;
use serde::{Deserialize, Serialize};

// ============================================================================
// Uploads
// ============================================================================

/// A file handed to the session by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as shown to the user
    pub name: String,
    /// Declared MIME type
    pub mime_type: String,
    /// Raw file content
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Create a new uploaded file.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Size of the content in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// How extraction of a single file ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractOutcome {
    /// Text was extracted (possibly empty)
    Text { text: String },
    /// The format is accepted but its extractor is a placeholder
    NotYetSupported,
    /// No extractor is registered for the MIME type
    NoExtractor,
    /// Extraction of this file failed; the rest of the batch was unaffected
    Failed { reason: String },
}

impl ExtractOutcome {
    /// Short label for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text { .. } => "ok",
            Self::NotYetSupported => "not yet supported",
            Self::NoExtractor => "no extractor",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Extraction result for one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Name of the source file
    pub name: String,
    /// Declared MIME type of the source file
    pub mime_type: String,
    /// Extraction outcome
    pub outcome: ExtractOutcome,
}

impl ExtractedDocument {
    /// Create a document from extracted text.
    pub fn with_text(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            outcome: ExtractOutcome::Text { text: text.into() },
        }
    }

    /// Extracted text, or `""` when nothing was extracted.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.outcome {
            ExtractOutcome::Text { text } => text,
            _ => "",
        }
    }

    /// Whether extraction of this file failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ExtractOutcome::Failed { .. })
    }
}

/// What the orchestrator records for a file whose MIME type has no extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnregisteredPolicy {
    /// Record an empty-text entry
    #[default]
    Empty,
    /// Record a failure marker
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_new() {
        let file = UploadedFile::new("report.pdf", "application/pdf", vec![1u8, 2, 3]);
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_text_of_each_outcome() {
        let ok = ExtractedDocument::with_text("a.pdf", "application/pdf", "Hello");
        assert_eq!(ok.text(), "Hello");

        for outcome in [
            ExtractOutcome::NotYetSupported,
            ExtractOutcome::NoExtractor,
            ExtractOutcome::Failed {
                reason: "boom".to_string(),
            },
        ] {
            let doc = ExtractedDocument {
                name: "x".to_string(),
                mime_type: "y".to_string(),
                outcome,
            };
            assert_eq!(doc.text(), "");
        }
    }

    #[test]
    fn test_empty_text_is_distinct_from_placeholder() {
        let empty = ExtractedDocument::with_text("a.pdf", "application/pdf", "");
        let placeholder = ExtractedDocument {
            name: "a.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            outcome: ExtractOutcome::NotYetSupported,
        };
        assert_eq!(empty.text(), placeholder.text());
        assert_ne!(empty, placeholder);
        assert_eq!(empty.outcome.label(), "ok");
        assert_eq!(placeholder.outcome.label(), "not yet supported");
    }

    #[test]
    fn test_is_failed() {
        let doc = ExtractedDocument {
            name: "broken.xlsx".to_string(),
            mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                .to_string(),
            outcome: ExtractOutcome::Failed {
                reason: "corrupt file: zip".to_string(),
            },
        };
        assert!(doc.is_failed());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&ExtractOutcome::Text {
            text: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"text","text":"hi"}"#);

        let json = serde_json::to_string(&ExtractOutcome::NoExtractor).unwrap();
        assert_eq!(json, r#"{"status":"no_extractor"}"#);
    }

    #[test]
    fn test_unregistered_policy_default_and_serde() {
        assert_eq!(UnregisteredPolicy::default(), UnregisteredPolicy::Empty);
        let policy: UnregisteredPolicy = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(policy, UnregisteredPolicy::Error);
    }
}
