use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::attachment::Attachment;
use crate::error::Result;
use crate::settings::IntakeSettings;
use crate::share::session::{SessionOutcome, ShareSession};
use crate::storage::{LocationResolver, StorageLayout};

/// Capacity of the host-facing event channel.
const EVENT_CHANNEL_SIZE: usize = 16;

/// Events emitted toward the host. Completion fires after the write
/// attempt whether or not persistence succeeded, so the host can dismiss
/// its share UI independently of the outcome.
#[derive(Debug)]
pub enum IntakeEvent {
    Completed {
        session: Uuid,
        outcome: SessionOutcome,
    },
}

/// Long-lived entry point wired up by the host. Each share action gets its
/// own detached session; two overlapping actions never share accumulator
/// state, and a stalled load stalls only its own session.
pub struct ShareIntake {
    layout: StorageLayout,
    settings: IntakeSettings,
    events: mpsc::Sender<IntakeEvent>,
}

impl ShareIntake {
    pub fn new(
        resolver: &dyn LocationResolver,
        settings: IntakeSettings,
    ) -> Result<(Self, mpsc::Receiver<IntakeEvent>)> {
        let layout = StorageLayout::resolve(resolver)?;
        let (events, events_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

        Ok((
            Self {
                layout,
                settings,
                events,
            },
            events_rx,
        ))
    }

    /// Launch one share action and return its id immediately. The matching
    /// `IntakeEvent::Completed` arrives on the event channel once the
    /// session has finished (or skipped finalizing an empty share).
    pub fn begin(&self, attachments: Vec<Box<dyn Attachment>>) -> Uuid {
        let id = Uuid::new_v4();
        let session = ShareSession::new(&self.layout, &self.settings);
        let events = self.events.clone();

        debug!(
            "Share action {} started with {} attachment(s)",
            id,
            attachments.len()
        );

        tokio::spawn(async move {
            let outcome = session.begin(attachments).await;
            if events
                .send(IntakeEvent::Completed {
                    session: id,
                    outcome,
                })
                .await
                .is_err()
            {
                warn!("Host dropped the intake event channel");
            }
        });

        id
    }

    /// Awaitable variant of `begin` for hosts that drive the session from
    /// their own task.
    pub async fn share(&self, attachments: Vec<Box<dyn Attachment>>) -> SessionOutcome {
        ShareSession::new(&self.layout, &self.settings)
            .begin(attachments)
            .await
    }

    pub fn settings(&self) -> &IntakeSettings {
        &self.settings
    }
}
