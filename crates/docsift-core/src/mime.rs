//! MIME types accepted at upload time.
//!
//! Matching is exact: no wildcards, no parameters, no extension fallback.

/// Portable Document Format.
pub const PDF: &str = "application/pdf";

/// Legacy Word document (`.doc`).
pub const MSWORD: &str = "application/msword";

/// Office Open XML workbook (`.xlsx`).
pub const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// All MIME types accepted by the upload filter.
pub const ACCEPTED_TYPES: [&str; 3] = [PDF, XLSX, MSWORD];

/// Whether `mime_type` exactly matches one of [`ACCEPTED_TYPES`].
#[must_use]
pub fn is_accepted(mime_type: &str) -> bool {
    ACCEPTED_TYPES.contains(&mime_type)
}
