//! Table-of-contents header and record parsing

use crate::catalog::TOC_SLOT_COUNT;
use crate::error::{NorError, Result};
use crate::formats::toc::types::*;
use crate::formats::toc::utils::LeRead;

/// Parse the version-specific header fields following the magic
pub fn parse_header(data: &[u8]) -> Result<TocHeader> {
    let version = data.read_u32(0x20)?;
    let header = match version {
        1 => TocHeader::V1 {
            mbr1_start: data.read_u32(0x24)?,
            mbr2_start: data.read_u32(0x28)?,
            unk: [
                data.read_u32(0x2C)?,
                data.read_u32(0x30)?,
                data.read_u32(0x34)?,
                data.read_u32(0x38)?,
            ],
            reserved: data.read_u32(0x3C)?,
        },
        4 => TocHeader::V4 {
            n_sectors: data.read_u32(0x24)?,
            reserved: data.read_u64(0x28)?,
            loader_start: data.read_u32(0x30)?,
            loader_count: data.read_u32(0x34)?,
            reserved2: data.read_u64(0x38)?,
        },
        other => TocHeader::Unknown { version: other },
    };
    Ok(header)
}

/// Parse one packed partition record at `offset`
pub fn parse_record(data: &[u8], offset: usize) -> Result<PartitionRecord> {
    Ok(PartitionRecord {
        start_lba: data.read_u32(offset)?,
        n_sectors: data.read_u32(offset + 4)?,
        type_code: data.read_u8(offset + 8)?,
        flag: data.read_u8(offset + 9)?,
        unknown: data.read_u16(offset + 10)?,
        padding: data.read_u64(offset + 12)?,
    })
}

/// Decode a complete table from a buffer holding at least [`TOC_TABLE_SIZE`] bytes.
///
/// The partition array is always read with the version 4 record layout; the
/// version only selects how the header fields are interpreted.
pub fn decode_table(data: &[u8]) -> Result<DecodedTable> {
    if data.len() < TOC_TABLE_SIZE {
        return Err(NorError::OutOfRange {
            offset: 0,
            length: TOC_TABLE_SIZE as u64,
            size: data.len() as u64,
        });
    }

    let magic = data.read_array::<TOC_MAGIC_LEN>(0)?;
    let header = parse_header(data)?;

    let partitions = (0..TOC_SLOT_COUNT)
        .map(|i| -> Result<DecodedPartition> {
            let record = parse_record(data, TOC_PARTITIONS_OFFSET + i * PARTITION_RECORD_SIZE)?;
            Ok(DecodedPartition::from_record(i, &record))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DecodedTable {
        magic,
        header,
        partitions,
    })
}
