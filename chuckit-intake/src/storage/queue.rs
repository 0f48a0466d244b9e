use std::fs;
use std::path::PathBuf;

use tracing::debug;
use uuid::Uuid;

use crate::error::{IntakeError, Result};
use crate::share::record::ShareRecord;

/// Publishes one immutable JSON entry per share action into the queue
/// directory. Entries are staged under a temp name and renamed into place,
/// so a concurrent scanner never observes a truncated document. From this
/// side the directory is append-only; entries are removed by the consumer.
#[derive(Debug, Clone)]
pub struct QueueWriter {
    dir: PathBuf,
}

impl QueueWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn enqueue(&self, record: &ShareRecord) -> Result<PathBuf> {
        let json = serde_json::to_vec_pretty(record)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| IntakeError::QueueWrite(format!("{}: {}", self.dir.display(), e)))?;

        let file_name = format!("{}.json", Uuid::new_v4());
        let path = self.dir.join(&file_name);
        let temp = self.dir.join(format!("{}.tmp.{}", file_name, std::process::id()));

        let written = fs::write(&temp, &json).and_then(|_| fs::rename(&temp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(IntakeError::QueueWrite(format!("{}: {}", path.display(), e)));
        }

        debug!("Enqueued {:?} record at {}", record.kind, path.display());
        Ok(path)
    }
}
