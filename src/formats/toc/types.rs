//! Table-of-contents types and constants

use crate::catalog::NOR_BLOCK_SIZE;
use serde::Serialize;

/// Length of the magic string at the start of a table
pub const TOC_MAGIC_LEN: usize = 0x20;
/// Offset of the partition record array
pub const TOC_PARTITIONS_OFFSET: usize = 0x40;
/// Packed size of one partition record
pub const PARTITION_RECORD_SIZE: usize = 20;
/// Bytes covered by header plus all partition records
pub const TOC_TABLE_SIZE: usize =
    TOC_PARTITIONS_OFFSET + crate::catalog::TOC_SLOT_COUNT * PARTITION_RECORD_SIZE;

/// Magic of the section 0 tables
pub const TOC_MAGIC: &[u8; TOC_MAGIC_LEN] = b"Sony Computer Entertainment Inc.";

/// Known partition type codes
pub const PARTITION_TYPES: &[(u8, &str)] = &[
    (0, "empty"),
    (1, "idstorage"),
    (2, "sam_ipl"),
    (3, "core_os"),
    (6, "bd_hrl"),
    (13, "emc_ipl"),
    (14, "eap_kbl"),
    (32, "emc_ipl"),
    (33, "eap_kbl"),
    (34, "nvs"),
    (38, "wifi"),
    (39, "vtrm"),
    (40, "empty"),
    (41, "C0050100"),
];

/// Name of a partition type, if known.
pub fn partition_type_name(code: u8) -> Option<&'static str> {
    PARTITION_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Name of a partition type, rendering unknown codes as `Unk_<code>`.
pub fn partition_name(code: u8) -> String {
    match partition_type_name(code) {
        Some(name) => name.to_string(),
        None => format!("Unk_{}", code),
    }
}

/// Which of the two table copies is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Only a zero byte selects slot A; every other value, not just 0x80,
    /// selects slot B.
    pub fn from_raw(raw: u8) -> Self {
        if raw == 0x00 {
            Slot::A
        } else {
            Slot::B
        }
    }
}

/// Version-specific header fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TocHeader {
    V1 {
        mbr1_start: u32,
        mbr2_start: u32,
        unk: [u32; 4],
        reserved: u32,
    },
    V4 {
        n_sectors: u32,
        reserved: u64,
        loader_start: u32,
        loader_count: u32,
        reserved2: u64,
    },
    Unknown {
        version: u32,
    },
}

impl TocHeader {
    pub fn version(&self) -> u32 {
        match self {
            TocHeader::V1 { .. } => 1,
            TocHeader::V4 { .. } => 4,
            TocHeader::Unknown { version } => *version,
        }
    }
}

/// One raw partition record, exactly as packed in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PartitionRecord {
    pub start_lba: u32,
    pub n_sectors: u32,
    pub type_code: u8,
    pub flag: u8,
    pub unknown: u16,
    pub padding: u64,
}

impl PartitionRecord {
    /// Packs the record into its on-flash layout.
    pub fn to_bytes(&self) -> [u8; PARTITION_RECORD_SIZE] {
        let mut out = [0u8; PARTITION_RECORD_SIZE];
        out[0..4].copy_from_slice(&self.start_lba.to_le_bytes());
        out[4..8].copy_from_slice(&self.n_sectors.to_le_bytes());
        out[8] = self.type_code;
        out[9] = self.flag;
        out[10..12].copy_from_slice(&self.unknown.to_le_bytes());
        out[12..20].copy_from_slice(&self.padding.to_le_bytes());
        out
    }
}

/// A partition as reported to callers, with extents in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedPartition {
    pub index: usize,
    pub name: String,
    pub offset: u64,
    pub size: u64,
    pub type_code: u8,
    pub flag: u8,
}

impl DecodedPartition {
    pub fn from_record(index: usize, record: &PartitionRecord) -> Self {
        Self {
            index,
            name: partition_name(record.type_code),
            offset: record.start_lba as u64 * NOR_BLOCK_SIZE,
            size: record.n_sectors as u64 * NOR_BLOCK_SIZE,
            type_code: record.type_code,
            flag: record.flag,
        }
    }

    /// True for slots carrying one of the "empty" type codes.
    pub fn is_unused(&self) -> bool {
        partition_type_name(self.type_code) == Some("empty")
    }
}

/// Decoded contents of one table copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTable {
    pub magic: [u8; TOC_MAGIC_LEN],
    pub header: TocHeader,
    pub partitions: Vec<DecodedPartition>,
}

/// The live partition table of a NOR image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    pub active_slot_raw: u8,
    pub slot: Slot,
    pub table_base_offset: u64,
    pub magic: [u8; TOC_MAGIC_LEN],
    pub header: TocHeader,
    pub partitions: Vec<DecodedPartition>,
}

impl TableOfContents {
    /// Partitions whose type is not one of the "empty" codes.
    pub fn non_empty(&self) -> impl Iterator<Item = &DecodedPartition> {
        self.partitions.iter().filter(|p| !p.is_unused())
    }

    pub fn has_expected_magic(&self) -> bool {
        &self.magic == TOC_MAGIC
    }
}
