//! Session state and the upload → extract → search pipeline.
//!
//! # Components
//!
//! - [`filter_accepted_files`]: Keeps only uploads with an accepted MIME type
//! - [`Orchestrator`]: Extracts a batch file by file, isolating failures
//! - [`Session`]: Explicit state mutated by the user actions
//!   (upload, set keyword, extract, change page)
//!
//! # Example
//!
//! ```rust,ignore
//! use docsift_extract::ExtractorRegistry;
//! use docsift_session::{Orchestrator, Session};
//! use std::sync::Arc;
//!
//! let orchestrator = Orchestrator::new(Arc::new(ExtractorRegistry::with_defaults()));
//! let mut session = Session::default();
//!
//! session.upload(files)?;
//! session.extract(&orchestrator).await;
//! session.set_keyword("invoice");
//!
//! for row in session.visible_rows() {
//!     println!("{}: {:?}", row.name, row.sentences);
//! }
//! ```

pub mod orchestrator;
pub mod session;
pub mod upload;

pub use orchestrator::{ExtractionUpdate, Orchestrator};
pub use session::{ResultRow, Session};
pub use upload::filter_accepted_files;
