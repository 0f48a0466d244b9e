use std::fs;
use std::path::PathBuf;

use tracing::debug;
use uuid::Uuid;

use crate::attachment::ImageData;
use crate::error::{IntakeError, Result};

/// Extension used when the host gave no usable content type.
const DEFAULT_EXT: &str = "jpg";

/// Persists image payloads under collision-free names inside the shared
/// images directory. The directory is shared across concurrently running
/// sessions; unique naming is the only cross-session discipline needed.
#[derive(Debug, Clone)]
pub struct PayloadStore {
    dir: PathBuf,
}

impl PayloadStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write the full buffer and return the final path. The payload is
    /// staged under a process-unique temp name and renamed into place, so
    /// a returned path always points at a complete file.
    pub fn store(&self, image: &ImageData) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| IntakeError::PayloadWrite(format!("{}: {}", self.dir.display(), e)))?;

        let file_name = format!(
            "{}.{}",
            Uuid::new_v4(),
            extension_for(image.content_type.as_deref())
        );
        let path = self.dir.join(&file_name);
        let temp = self.dir.join(format!("{}.tmp.{}", file_name, std::process::id()));

        let written = fs::write(&temp, &image.bytes).and_then(|_| fs::rename(&temp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(IntakeError::PayloadWrite(format!("{}: {}", path.display(), e)));
        }

        debug!(
            "Stored {} byte payload at {}",
            image.bytes.len(),
            path.display()
        );
        Ok(path)
    }
}

fn extension_for(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("image/png") => "png",
        Some("image/jpeg") | Some("image/jpg") => "jpg",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        Some("image/heic") => "heic",
        _ => DEFAULT_EXT,
    }
}
