//! Network error types for serialization and protocol operations.

use std::io;

use thiserror::Error;

/// Errors that can occur during network message serialization/deserialization
#[derive(Debug, Error)]
pub enum SerializationError {
    /// Failed to encode a message
    #[error("Failed to encode message: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode a message
    #[error("Failed to decode message: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Message size exceeded maximum allowed
    #[error("Message size {actual} exceeds maximum {max}")]
    MessageTooLarge { actual: usize, max: usize },

    /// Reading from or writing to the peer failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SerializationError {
    /// Whether the error means the peer went away rather than sent garbage.
    pub fn is_disconnect(&self) -> bool {
        match self {
            Self::Io(error) => matches!(
                error.kind(),
                io::ErrorKind::UnexpectedEof
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}

/// Result type for serialization operations
pub type Result<T> = std::result::Result<T, SerializationError>;
