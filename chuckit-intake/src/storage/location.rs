use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory under the storage root holding one JSON entry per share action.
pub const QUEUE_DIR: &str = "share_queue";
/// Directory under the storage root holding image payloads.
pub const IMAGES_DIR: &str = "images";

/// Platform seam: hands the core the shared storage root as an opaque
/// absolute path. Everything else in the crate is platform-agnostic; hosts
/// implement this against whatever app-group or data-dir mechanism their
/// platform provides.
pub trait LocationResolver: Send + Sync {
    fn storage_root(&self) -> Result<PathBuf>;
}

/// Resolver for hosts that already know the root (tests, desktop hosts).
pub struct FixedRoot(PathBuf);

impl FixedRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
}

impl LocationResolver for FixedRoot {
    fn storage_root(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Queue and payload directories derived from the resolved storage root.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn resolve(resolver: &dyn LocationResolver) -> Result<Self> {
        Ok(Self {
            root: resolver.storage_root()?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn queue_dir(&self) -> PathBuf {
        self.root.join(QUEUE_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_derives_fixed_subdirectories() {
        let resolver = FixedRoot::new("/shared/chuckit");
        let layout = StorageLayout::resolve(&resolver).unwrap();

        assert_eq!(layout.root(), Path::new("/shared/chuckit"));
        assert_eq!(layout.queue_dir(), PathBuf::from("/shared/chuckit/share_queue"));
        assert_eq!(layout.images_dir(), PathBuf::from("/shared/chuckit/images"));
    }
}
