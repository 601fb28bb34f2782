//! Turning paths on disk into uploads.
//!
//! The MIME type of each upload is the `--mime` override when given, otherwise
//! the type guessed from the file name. Everything downstream matches on that
//! declared type only.

use anyhow::{Context, Result};
use docsift_core::UploadedFile;
use std::path::Path;
use tracing::{debug, warn};

/// Read `paths` into uploads, skipping files larger than `max_file_size`.
///
/// Fails when every path was skipped for its size.
pub async fn load_uploads<P: AsRef<Path>>(
    paths: &[P],
    mime_override: Option<&str>,
    max_file_size: u64,
) -> Result<Vec<UploadedFile>> {
    let mut uploads = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        if !metadata.is_file() {
            anyhow::bail!("Not a file: {}", path.display());
        }

        if metadata.len() > max_file_size {
            warn!(
                "Skipping {:?}: {} bytes exceeds the {} byte limit",
                path,
                metadata.len(),
                max_file_size
            );
            continue;
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mime_type = match mime_override {
            Some(mime) => mime.to_string(),
            None => mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string(),
        };

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        debug!("Loaded {:?} as {} ({} bytes)", name, mime_type, bytes.len());
        uploads.push(UploadedFile::new(name, mime_type, bytes));
    }

    if uploads.is_empty() && !paths.is_empty() {
        anyhow::bail!(
            "All files exceed the size limit of {max_file_size} bytes (extract.max_file_size)"
        );
    }

    Ok(uploads)
}
