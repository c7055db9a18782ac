//! Protocol-level errors.

use std::io;
use thiserror::Error;

/// Errors produced while encoding or decoding wire frames.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A frame payload was not valid UTF-8.
    #[error("invalid utf-8 in frame at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte within the payload.
        byte_pos: usize,
        /// Description from the UTF-8 validator.
        details: String,
    },

    /// An outgoing frame exceeded what the length prefix can express.
    #[error("frame too long: {actual} bytes (limit {limit})")]
    FrameTooLong {
        /// Actual payload size in bytes.
        actual: usize,
        /// Maximum payload size the prefix can carry.
        limit: usize,
    },
}

/// Convenient result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
