//! Custom error types for the byte store adapters.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Range {offset:#x}+{length:#x} exceeds store size {size:#x}")]
    OutOfRange { offset: u64, length: u64, size: u64 },

    #[error("Store was opened read-only.")]
    ReadOnly,

    #[error("An underlying I/O error occurred: {0}")]
    StdIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
