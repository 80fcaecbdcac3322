use thiserror::Error;

/// Error type that captures common catalog and session failures.
#[derive(Debug, Error)]
pub enum TurfbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown turf id: {0}")]
    UnknownTurf(u32),
    #[error("No booking in progress")]
    NoActiveBooking,
}
