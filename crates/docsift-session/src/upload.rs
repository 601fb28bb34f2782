//! Upload-time MIME filtering.

use docsift_core::{mime, UploadedFile};
use tracing::debug;

/// Keep the files whose MIME type is accepted, in their original order.
///
/// Rejected files are dropped silently.
#[must_use]
pub fn filter_accepted_files(candidates: Vec<UploadedFile>) -> Vec<UploadedFile> {
    candidates
        .into_iter()
        .filter(|file| {
            let accepted = mime::is_accepted(&file.mime_type);
            if !accepted {
                debug!("Dropping {:?} ({})", file.name, file.mime_type);
            }
            accepted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime_type: &str) -> UploadedFile {
        UploadedFile::new(name, mime_type, Vec::new())
    }

    #[test]
    fn test_keeps_accepted_drops_rejected() {
        let accepted = filter_accepted_files(vec![
            file("a.pdf", mime::PDF),
            file("notes.txt", "text/plain"),
            file("b.xlsx", mime::XLSX),
            file("c.doc", mime::MSWORD),
            file("photo.png", "image/png"),
        ]);

        let names: Vec<&str> = accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.xlsx", "c.doc"]);
    }

    #[test]
    fn test_matches_mime_not_extension() {
        let accepted = filter_accepted_files(vec![
            file("report.pdf", "application/octet-stream"),
            file("no_extension", mime::PDF),
        ]);

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].name, "no_extension");
    }

    #[test]
    fn test_all_rejected() {
        let accepted = filter_accepted_files(vec![
            file("a.txt", "text/plain"),
            file("b.docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        ]);
        assert!(accepted.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_accepted_files(Vec::new()).is_empty());
    }
}
