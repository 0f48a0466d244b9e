use std::path::PathBuf;

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::attachment::Attachment;
use crate::settings::IntakeSettings;
use crate::share::classifier::{classify, is_web_url};
use crate::share::record::{PartialContent, ShareKind, ShareRecord};
use crate::share::resolver;
use crate::storage::{PayloadStore, QueueWriter, StorageLayout};

/// What happened to one share action. Handed to the host as information
/// only; persistence failures are never surfaced as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A record was published into the queue.
    Queued { kind: ShareKind, entry: PathBuf },
    /// Nothing resolved to content; no record was written.
    Empty,
    /// A record was built but the queue write failed; the record is lost.
    Dropped,
}

/// Orchestrates one share action end-to-end, exactly once.
///
/// `begin` consumes the session, so the finalize pass cannot re-enter.
/// Resolution tasks only return values; the accumulator is owned and
/// mutated by the single task driving `begin`, never shared across tasks.
pub struct ShareSession {
    payloads: PayloadStore,
    queue: QueueWriter,
    source_app: String,
}

impl ShareSession {
    pub fn new(layout: &StorageLayout, settings: &IntakeSettings) -> Self {
        Self {
            payloads: PayloadStore::new(layout.images_dir()),
            queue: QueueWriter::new(layout.queue_dir()),
            source_app: settings.source_app.clone(),
        }
    }

    /// Run the whole action: one resolution task per attachment, a join
    /// barrier over all of them, then a single finalize pass. Every task
    /// settles the barrier exactly once, whether it resolved content,
    /// resolved nothing, or panicked.
    pub async fn begin(self, attachments: Vec<Box<dyn Attachment>>) -> SessionOutcome {
        if attachments.is_empty() {
            debug!("Share action carried no attachments");
            return SessionOutcome::Empty;
        }

        let tasks: Vec<_> = attachments
            .into_iter()
            .map(|attachment| {
                tokio::spawn(async move { resolver::resolve(attachment.as_ref()).await })
            })
            .collect();

        // Deterministic merge: partials fold in attachment order, first
        // resolved value per field wins.
        let mut merged = PartialContent::default();
        for joined in join_all(tasks).await {
            match joined {
                Ok(partial) => merged.merge(partial),
                // A panicked resolver counts as a definitively failed load.
                Err(e) => warn!("Resolution task aborted: {}", e),
            }
        }

        self.finalize(merged)
    }

    fn finalize(&self, mut content: PartialContent) -> SessionOutcome {
        if content.is_empty() {
            debug!("No representation resolved; nothing to enqueue");
            return SessionOutcome::Empty;
        }

        // Plain text that is a single absolute web link was shared as a
        // link; record it under `url`.
        if content.url.is_none() && content.text.as_deref().map(is_web_url).unwrap_or(false) {
            content.url = content.text.take().map(|t| t.trim().to_string());
        }

        let image_path = match content.image.as_ref() {
            Some(image) => match self.payloads.store(image) {
                Ok(path) => Some(path),
                Err(e) => {
                    // Classification falls through to the next priority.
                    warn!("Image payload not persisted: {}", e);
                    None
                }
            },
            None => None,
        };

        let kind = match classify(
            image_path.as_deref(),
            content.url.as_deref(),
            content.text.as_deref(),
        ) {
            Some(kind) => kind,
            None => return SessionOutcome::Empty,
        };

        let record = ShareRecord {
            timestamp: Utc::now().timestamp_millis(),
            source_app: self.source_app.clone(),
            kind,
            text: content.text,
            url: content.url,
            image_path: image_path.map(|p| p.to_string_lossy().into_owned()),
        };

        match self.queue.enqueue(&record) {
            Ok(entry) => {
                info!("Queued {:?} share at {}", kind, entry.display());
                SessionOutcome::Queued { kind, entry }
            }
            Err(e) => {
                // Deliberately not retried; the host still gets completion.
                error!("Failed to enqueue share record: {}", e);
                SessionOutcome::Dropped
            }
        }
    }
}
