//! # docsift-core
//!
//! Core types and traits shared by the docsift crates.
//!
//! This crate provides the foundational abstractions of the pipeline:
//!
//! - **Uploads**: [`UploadedFile`] carries a name, a declared MIME type and the raw bytes
//! - **Extraction**: [`TextExtractor`] converts raw bytes into plain text
//! - **Results**: [`ExtractedDocument`] pairs a file name with an [`ExtractOutcome`]
//!
//! ## Architecture
//!
//! ```text
//! UploadedFile → upload filter → ExtractorRegistry → ExtractedDocument
//!                                                         ↓
//!                                        keyword → sentence filter → page
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`UploadedFile`] | A binary blob with a name and declared MIME type |
//! | [`ExtractedDocument`] | Per-file extraction result, in upload order |
//! | [`ExtractOutcome`] | Text, placeholder, missing extractor, or failure marker |
//! | [`UnregisteredPolicy`] | What to record for a MIME type with no extractor |
//!
//! ## Related Crates
//!
//! - `docsift-extract`: PDF, spreadsheet and Word extractors plus the MIME registry
//! - `docsift-search`: Sentence filtering and pagination
//! - `docsift-session`: Upload filter, batch orchestrator and session state

pub mod error;
pub mod mime;
pub mod traits;
pub mod types;

pub use error::{ExtractError, UploadError};
pub use traits::*;
pub use types::*;
