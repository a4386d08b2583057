//! Inspection and editing of console NOR flash dumps.
//!
//! A dump is a fixed 32 MiB image split into two sections. This crate reads it
//! through a [`io::ByteStore`], resolves named fields and fixed partitions from
//! the [`catalog`], decodes the live partition table ([`formats::toc`]) and
//! classifies values against known reference data ([`classify`]).

/// Classification of field values and partition contents
pub mod classify;
/// Region catalog: fields, partitions, layout constants
pub mod catalog;
/// Reference data and validation configuration
pub mod config;
pub mod error;
/// Primary/backup field access
pub mod field;
/// On-flash structure parsers
pub mod formats;
pub mod hashing;
pub mod image;
pub mod io;
pub mod logging;

pub use error::{NorError, Result};
pub use image::{ImageSummary, NorImage};
