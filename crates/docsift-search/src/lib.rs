//! Keyword sentence filtering and pagination.
//!
//! - [`filter_sentences`]: split text on `.` and keep fragments containing a keyword
//! - [`paginate`] and [`PageState`]: fixed-size pages over a result list

pub mod pagination;
pub mod sentences;

pub use pagination::{paginate, total_pages, PageState, DEFAULT_ITEMS_PER_PAGE};
pub use sentences::{filter_sentences, fragments};
