//! Partition table-of-contents decoder
//!
//! Section 0 of the image carries an active-slot byte at `0x1000` and two
//! copies of the partition table at `0x2000` and `0x3000`. The slot byte picks
//! which copy is live; the live copy lists 16 partition extents in 512-byte
//! blocks.

pub mod headers;
pub mod types;
pub mod utils;

use crate::catalog::NOR_MBR_SIZE;
use crate::error::Result;
use crate::io::ByteStore;
use tracing::debug;

pub use headers::{decode_table, parse_header, parse_record};
pub use types::*;

/// Offset of the table copy selected by `slot`.
pub fn table_base_offset(slot: Slot) -> u64 {
    match slot {
        Slot::A => NOR_MBR_SIZE * 2,
        Slot::B => NOR_MBR_SIZE * 3,
    }
}

/// Reads the raw active-slot byte.
pub fn read_active_slot<S: ByteStore + ?Sized>(store: &mut S) -> Result<u8> {
    let raw = store.read(NOR_MBR_SIZE, 1)?;
    Ok(raw[0])
}

/// Decodes the live partition table of an image.
///
/// Each call re-reads the store. Any read failure aborts the whole decode.
pub fn decode_toc<S: ByteStore + ?Sized>(store: &mut S) -> Result<TableOfContents> {
    let active_slot_raw = read_active_slot(store)?;
    let slot = Slot::from_raw(active_slot_raw);
    let table_base_offset = table_base_offset(slot);
    debug!(active_slot_raw, ?slot, table_base_offset, "Decoding table of contents");

    let data = store.read(table_base_offset, TOC_TABLE_SIZE as u64)?;
    let table = decode_table(&data)?;
    debug!(
        version = table.header.version(),
        partitions = table.partitions.len(),
        "Decoded table of contents"
    );

    Ok(TableOfContents {
        active_slot_raw,
        slot,
        table_base_offset,
        magic: table.magic,
        header: table.header,
        partitions: table.partitions,
    })
}
