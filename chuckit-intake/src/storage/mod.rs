mod location;
mod payload;
mod queue;

pub use location::{FixedRoot, LocationResolver, StorageLayout, IMAGES_DIR, QUEUE_DIR};
pub use payload::PayloadStore;
pub use queue::QueueWriter;
