//! Region catalog: named fields and fixed partitions of a NOR image.
//!
//! The catalog is the single source of truth for byte offsets. Consumers ask
//! for regions by symbolic key and never hard-code offsets themselves.
//! Lookups return `Option` so optional fields can be handled without
//! treating an unknown key as a failure; the [`field`] and [`partition`]
//! helpers convert absence into [`NorError::NotFound`] for `?` callers.

pub mod fields;
pub mod partitions;

use crate::error::{NorError, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub use fields::NOR_FIELDS;
pub use partitions::NOR_PARTITIONS;

/// Size of a complete NOR dump.
pub const NOR_DUMP_SIZE: u64 = 0x2000000;
/// Distance between a field and its backup copy.
pub const NOR_BACKUP_OFFSET: u64 = 0x3000;
/// Size of the header, active-slot and table-of-contents units.
pub const NOR_MBR_SIZE: u64 = 0x1000;
/// Unit of partition extents in the table of contents.
pub const NOR_BLOCK_SIZE: u64 = 0x200;
/// Size of each of the two flash sections.
pub const NOR_SECTION_SIZE: u64 = 0x200000;
/// Number of partition records in a table of contents.
pub const TOC_SLOT_COUNT: usize = 16;

/// Display label used when a key or code is not known.
pub const STR_UNKNOWN: &str = "Unknown";

/// How a field's bytes are meant to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    Bytes,
    Text,
}

/// A named, fixed-offset byte range holding one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub offset: u32,
    pub length: u32,
    pub kind: ValueKind,
    pub display_name: &'static str,
}

impl FieldDescriptor {
    pub const fn new(
        key: &'static str,
        offset: u32,
        length: u32,
        kind: ValueKind,
        display_name: &'static str,
    ) -> Self {
        Self {
            key,
            offset,
            length,
            kind,
            display_name,
        }
    }

    /// Offset of the backup copy.
    pub fn backup_offset(&self) -> u64 {
        self.offset as u64 + NOR_BACKUP_OFFSET
    }

    pub fn end(&self) -> u64 {
        self.offset as u64 + self.length as u64
    }
}

/// A fixed partition of the flash layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionDescriptor {
    pub key: &'static str,
    pub offset: u32,
    pub length: u32,
    pub internal_name: &'static str,
}

impl PartitionDescriptor {
    pub const fn new(
        key: &'static str,
        offset: u32,
        length: u32,
        internal_name: &'static str,
    ) -> Self {
        Self {
            key,
            offset,
            length,
            internal_name,
        }
    }

    pub fn end(&self) -> u64 {
        self.offset as u64 + self.length as u64
    }
}

static FIELD_INDEX: Lazy<HashMap<&'static str, &'static FieldDescriptor>> =
    Lazy::new(|| NOR_FIELDS.iter().map(|f| (f.key, f)).collect());

static PARTITION_INDEX: Lazy<HashMap<&'static str, &'static PartitionDescriptor>> =
    Lazy::new(|| NOR_PARTITIONS.iter().map(|p| (p.key, p)).collect());

/// Looks up a field by key.
pub fn lookup_field(key: &str) -> Option<&'static FieldDescriptor> {
    FIELD_INDEX.get(key).copied()
}

/// Looks up a fixed partition by key.
pub fn lookup_partition(key: &str) -> Option<&'static PartitionDescriptor> {
    PARTITION_INDEX.get(key).copied()
}

/// Like [`lookup_field`], but an unknown key is an error.
pub fn field(key: &str) -> Result<&'static FieldDescriptor> {
    lookup_field(key).ok_or_else(|| NorError::NotFound(key.to_string()))
}

/// Like [`lookup_partition`], but an unknown key is an error.
pub fn partition(key: &str) -> Result<&'static PartitionDescriptor> {
    lookup_partition(key).ok_or_else(|| NorError::NotFound(key.to_string()))
}

/// Human-readable name of a field, or `"Unknown"`.
pub fn field_display_name(key: &str) -> &'static str {
    lookup_field(key).map_or(STR_UNKNOWN, |f| f.display_name)
}
