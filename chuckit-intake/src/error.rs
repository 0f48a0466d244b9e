use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Attachment load error: {0}")]
    AttachmentLoad(String),

    #[error("Unsupported representation")]
    UnsupportedRepresentation,

    #[error("Payload write error: {0}")]
    PayloadWrite(String),

    #[error("Queue write error: {0}")]
    QueueWrite(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl serde::Serialize for IntakeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
