//! # docsift-extract
//!
//! Text extraction from uploaded document buffers.
//!
//! Every extractor implements [`TextExtractor`](docsift_core::TextExtractor) and is
//! selected by exact MIME type through the [`ExtractorRegistry`].
//!
//! ## Supported Formats
//!
//! | Extractor | MIME type | Output |
//! |-----------|-----------|--------|
//! | [`PdfExtractor`] | `application/pdf` | Page text items joined by spaces, pages concatenated in order |
//! | [`SpreadsheetExtractor`] | `application/vnd.openxmlformats-officedocument.spreadsheetml.sheet` | First sheet only, cells and rows joined by spaces |
//! | [`WordExtractor`] | `application/msword` | Placeholder, always `""` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docsift_extract::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let text = registry.extract("application/pdf", &bytes).await?;
//! ```

pub mod pdf;
pub mod registry;
pub mod spreadsheet;
pub mod word;

pub use pdf::{LopdfSource, PdfExtractor, PdfSource};
pub use registry::ExtractorRegistry;
pub use spreadsheet::SpreadsheetExtractor;
pub use word::WordExtractor;
