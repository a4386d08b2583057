//! Typed-field access with primary and backup copies.
//!
//! Every field lives at a fixed offset and has a mirrored copy
//! [`NOR_BACKUP_OFFSET`] bytes further on. Nothing is cached: each call goes to
//! the store, and a read followed by a write of the same field is not atomic.

use crate::catalog::{self, FieldDescriptor, PartitionDescriptor, NOR_BACKUP_OFFSET};
use crate::error::{NorError, Result};
use crate::io::ByteStore;
use bytes::Bytes;
use tracing::{debug, trace};

fn read_at<S: ByteStore + ?Sized>(store: &mut S, offset: u64, length: u64) -> Result<Bytes> {
    let data = store.read(offset, length)?;
    trace!(offset, length, "Read range");
    Ok(data)
}

fn write_at<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &FieldDescriptor,
    offset: u64,
    data: &[u8],
) -> Result<()> {
    if data.len() != desc.length as usize {
        return Err(NorError::LengthMismatch {
            key: desc.key.to_string(),
            expected: desc.length as usize,
            found: data.len(),
        });
    }
    store.write(offset, data)?;
    debug!(key = desc.key, offset, length = data.len(), "Wrote field");
    Ok(())
}

/// Reads the primary copy of a field.
pub fn read_field<S: ByteStore + ?Sized>(store: &mut S, desc: &FieldDescriptor) -> Result<Bytes> {
    read_at(store, desc.offset as u64, desc.length as u64)
}

/// Reads the backup copy of a field.
pub fn read_field_backup<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &FieldDescriptor,
) -> Result<Bytes> {
    read_at(store, desc.backup_offset(), desc.length as u64)
}

/// Reads the primary and backup copies together.
pub fn read_field_pair<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &FieldDescriptor,
) -> Result<(Bytes, Bytes)> {
    let primary = read_field(store, desc)?;
    let backup = read_field_backup(store, desc)?;
    Ok((primary, backup))
}

/// Overwrites the primary copy of a field.
///
/// The payload must be exactly `desc.length` bytes; otherwise the store is
/// left untouched and `LengthMismatch` is returned.
pub fn write_field<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &FieldDescriptor,
    data: &[u8],
) -> Result<()> {
    write_at(store, desc, desc.offset as u64, data)
}

/// Overwrites the backup copy of a field.
pub fn write_field_backup<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &FieldDescriptor,
    data: &[u8],
) -> Result<()> {
    write_at(store, desc, desc.offset as u64 + NOR_BACKUP_OFFSET, data)
}

/// Decodes a field's primary copy as text.
///
/// Invalid UTF-8 is replaced and trailing NUL padding is dropped.
pub fn read_text<S: ByteStore + ?Sized>(store: &mut S, desc: &FieldDescriptor) -> Result<String> {
    let raw = read_field(store, desc)?;
    Ok(String::from_utf8_lossy(&raw)
        .trim_end_matches('\0')
        .to_string())
}

pub fn read_key<S: ByteStore + ?Sized>(store: &mut S, key: &str) -> Result<Bytes> {
    read_field(store, catalog::field(key)?)
}

pub fn read_key_backup<S: ByteStore + ?Sized>(store: &mut S, key: &str) -> Result<Bytes> {
    read_field_backup(store, catalog::field(key)?)
}

pub fn write_key<S: ByteStore + ?Sized>(store: &mut S, key: &str, data: &[u8]) -> Result<()> {
    write_field(store, catalog::field(key)?, data)
}

pub fn write_key_backup<S: ByteStore + ?Sized>(
    store: &mut S,
    key: &str,
    data: &[u8],
) -> Result<()> {
    write_field_backup(store, catalog::field(key)?, data)
}

/// Reads the raw contents of a fixed partition.
pub fn read_partition<S: ByteStore + ?Sized>(
    store: &mut S,
    desc: &PartitionDescriptor,
) -> Result<Bytes> {
    read_at(store, desc.offset as u64, desc.length as u64)
}
