//! Error types for docsift.

use thiserror::Error;

/// Upload-time validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// None of the dropped files has an accepted MIME type.
    #[error("Invalid file type. Please upload a PDF, Excel, or Word file.")]
    InvalidUploadType,
}

/// Content extraction errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("corrupt file: {0}")]
    Corrupt(String),

    #[error("extraction failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_upload_type_message() {
        let err = UploadError::InvalidUploadType;
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload a PDF, Excel, or Word file."
        );
    }

    #[test]
    fn test_extract_error_unsupported_type_display() {
        let err = ExtractError::UnsupportedType("text/plain".to_string());
        assert_eq!(err.to_string(), "unsupported file type: text/plain");
    }

    #[test]
    fn test_extract_error_corrupt_display() {
        let err = ExtractError::Corrupt("invalid file header".to_string());
        assert_eq!(err.to_string(), "corrupt file: invalid file header");
    }

    #[test]
    fn test_extract_error_failed_display() {
        let err = ExtractError::Failed("Task join error: cancelled".to_string());
        assert_eq!(err.to_string(), "extraction failed: Task join error: cancelled");
    }
}
