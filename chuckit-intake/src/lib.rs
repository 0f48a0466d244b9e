//! Share-intake core for Chuck'it.
//!
//! Captures content handed over by the OS share sheet, resolves every
//! representation each attachment conforms to, classifies the result under
//! a fixed image > url > text priority, and publishes one immutable JSON
//! record (plus any image payload) into a file-system queue drained by the
//! main application process.
//!
//! The host wires in two seams: a [`LocationResolver`] providing the shared
//! storage root, and an [`Attachment`] implementation per item the OS hands
//! over. Everything else is platform-agnostic.

pub mod attachment;
pub mod error;
pub mod intake;
pub mod settings;
pub mod share;
pub mod storage;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use attachment::{Attachment, ImageData, Representation};
pub use error::{IntakeError, Result};
pub use intake::{IntakeEvent, ShareIntake};
pub use settings::{load_settings, save_settings, IntakeSettings};
pub use share::{PartialContent, SessionOutcome, ShareKind, ShareRecord, ShareSession};
pub use storage::{FixedRoot, LocationResolver, StorageLayout};

/// Initialize tracing for hosts that have no subscriber of their own.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chuckit_intake=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
