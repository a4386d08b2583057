//! Error types for NOR image inspection and editing.
//!
//! Lookups of optional data (catalog keys, classification tables) return
//! `Option` or sentinel values instead; the variants here are reserved for
//! failures that abort the current operation.

use crate::io::error::StoreError;
use thiserror::Error;

/// Main error type for norscope operations.
#[derive(Debug, Error)]
pub enum NorError {
    /// Symbolic key not present in the region catalog
    #[error("Unknown key: {0}")]
    NotFound(String),

    /// Requested range lies outside the backing store
    #[error("Range {offset:#x}+{length:#x} exceeds store size {size:#x}")]
    OutOfRange { offset: u64, length: u64, size: u64 },

    /// Payload size disagrees with the field's declared length
    #[error("Length mismatch for {key}: expected {expected} bytes, got {found}")]
    LengthMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    /// Write attempted on a store opened read-only
    #[error("Store is read-only")]
    ReadOnly,

    /// Image is not the size of a full NOR dump
    #[error("Invalid image size: expected {expected:#x} bytes, found {found:#x}")]
    InvalidImageSize { expected: u64, found: u64 },

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for NorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OutOfRange {
                offset,
                length,
                size,
            } => NorError::OutOfRange {
                offset,
                length,
                size,
            },
            StoreError::ReadOnly => NorError::ReadOnly,
            StoreError::StdIo(e) => NorError::Io(e),
        }
    }
}

/// Result type alias for norscope operations
pub type Result<T> = std::result::Result<T, NorError>;
