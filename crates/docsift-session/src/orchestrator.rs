//! Batch extraction.

use docsift_core::{
    ExtractError, ExtractOutcome, ExtractedDocument, UnregisteredPolicy, UploadedFile,
};
use docsift_extract::ExtractorRegistry;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Extraction progress events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionUpdate {
    BatchStarted { file_count: usize },
    FileStarted { name: String },
    FileExtracted { name: String, chars: usize },
    FileSkipped { name: String, reason: String },
    FileFailed { name: String, error: String },
    BatchFinished { completed: usize, failed: usize },
}

/// Runs a batch of uploads through the extractor registry.
pub struct Orchestrator {
    /// Extractor registry
    registry: Arc<ExtractorRegistry>,
    /// Handling of MIME types with no extractor
    policy: UnregisteredPolicy,
    /// Update broadcast
    update_tx: broadcast::Sender<ExtractionUpdate>,
}

impl Orchestrator {
    /// Create an orchestrator that records empty text for unknown MIME types.
    #[must_use]
    pub fn new(registry: Arc<ExtractorRegistry>) -> Self {
        Self::with_policy(registry, UnregisteredPolicy::default())
    }

    /// Create an orchestrator with an explicit unregistered-type policy.
    #[must_use]
    pub fn with_policy(registry: Arc<ExtractorRegistry>, policy: UnregisteredPolicy) -> Self {
        let (update_tx, _) = broadcast::channel(256);
        Self {
            registry,
            policy,
            update_tx,
        }
    }

    /// Subscribe to extraction updates.
    pub fn subscribe(&self) -> broadcast::Receiver<ExtractionUpdate> {
        self.update_tx.subscribe()
    }

    /// Extract every file in upload order.
    ///
    /// Files are processed one after another. A file that fails gets a
    /// [`ExtractOutcome::Failed`] entry and the batch carries on, so the result
    /// always has one entry per input file, in input order.
    pub async fn extract_all(&self, files: &[UploadedFile]) -> Vec<ExtractedDocument> {
        info!("Extracting {} files", files.len());
        let _ = self.update_tx.send(ExtractionUpdate::BatchStarted {
            file_count: files.len(),
        });

        let mut documents = Vec::with_capacity(files.len());
        let mut failed = 0usize;

        for file in files {
            let _ = self.update_tx.send(ExtractionUpdate::FileStarted {
                name: file.name.clone(),
            });

            let outcome = self.extract_one(file).await;
            match &outcome {
                ExtractOutcome::Text { text } => {
                    debug!("Extracted {:?} ({} chars)", file.name, text.chars().count());
                    let _ = self.update_tx.send(ExtractionUpdate::FileExtracted {
                        name: file.name.clone(),
                        chars: text.chars().count(),
                    });
                }
                ExtractOutcome::NotYetSupported | ExtractOutcome::NoExtractor => {
                    let _ = self.update_tx.send(ExtractionUpdate::FileSkipped {
                        name: file.name.clone(),
                        reason: outcome.label().to_string(),
                    });
                }
                ExtractOutcome::Failed { reason } => {
                    failed += 1;
                    warn!("Failed to extract {:?}: {}", file.name, reason);
                    let _ = self.update_tx.send(ExtractionUpdate::FileFailed {
                        name: file.name.clone(),
                        error: reason.clone(),
                    });
                }
            }

            documents.push(ExtractedDocument {
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
                outcome,
            });
        }

        let completed = documents.len() - failed;
        info!(
            "Extraction complete: {} files, {} failed",
            documents.len(),
            failed
        );
        let _ = self
            .update_tx
            .send(ExtractionUpdate::BatchFinished { completed, failed });

        documents
    }

    /// Extract a single file, turning every error into an outcome.
    async fn extract_one(&self, file: &UploadedFile) -> ExtractOutcome {
        let Some(extractor) = self.registry.get_for_mime(&file.mime_type) else {
            debug!("No extractor for {:?} ({})", file.name, file.mime_type);
            return match self.policy {
                UnregisteredPolicy::Empty => ExtractOutcome::NoExtractor,
                UnregisteredPolicy::Error => ExtractOutcome::Failed {
                    reason: ExtractError::UnsupportedType(file.mime_type.clone()).to_string(),
                },
            };
        };

        match extractor.extract_bytes(&file.bytes).await {
            Ok(_) if extractor.is_placeholder() => ExtractOutcome::NotYetSupported,
            Ok(text) => ExtractOutcome::Text { text },
            Err(e) => ExtractOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}
