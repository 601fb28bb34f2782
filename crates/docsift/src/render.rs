//! Text and JSON views of a session.

use docsift_session::{ResultRow, Session};
use serde::Serialize;
use std::fmt::Write;

/// Everything shown for the current page.
#[derive(Debug, Serialize)]
pub struct View<'a> {
    upload_status: Option<&'a str>,
    keyword: &'a str,
    current_page: usize,
    total_pages: usize,
    rows: Vec<ResultRow<'a>>,
}

impl<'a> View<'a> {
    /// Snapshot the displayable state of `session`.
    pub fn of(session: &'a Session) -> Self {
        Self {
            upload_status: session.upload_status(),
            keyword: session.keyword(),
            current_page: session.current_page(),
            total_pages: session.total_pages(),
            rows: session.visible_rows(),
        }
    }
}

/// Render the session as JSON.
pub fn render_json(session: &Session) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&View::of(session))
}

/// Render the session as a plain text table.
pub fn render_text(session: &Session) -> String {
    let view = View::of(session);
    let mut out = String::new();

    match view.upload_status {
        Some(name) => {
            let _ = writeln!(out, "Uploaded: {name}");
        }
        None => {
            let _ = writeln!(out, "No files uploaded.");
        }
    }

    if view.rows.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Keyword: {:?}", view.keyword);
    let _ = writeln!(out);
    let _ = writeln!(out, "Files and Sentences:");

    for row in &view.rows {
        if row.status == "ok" {
            let _ = writeln!(out, "{}", row.name);
        } else {
            let _ = writeln!(out, "{} [{}]", row.name, row.status);
        }
        for sentence in &row.sentences {
            let _ = writeln!(out, "    {sentence}");
        }
    }

    if session.controls_visible() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Page {} of {}", view.current_page, view.total_pages);
    }

    out
}
