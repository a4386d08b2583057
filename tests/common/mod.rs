//! Common test utilities and helpers.
//!
//! Builders for synthetic NOR images shared by the integration tests.

use norscope::catalog::{lookup_field, NOR_DUMP_SIZE};
use norscope::formats::toc::{
    PartitionRecord, PARTITION_RECORD_SIZE, TOC_MAGIC, TOC_MAGIC_LEN, TOC_PARTITIONS_OFFSET,
};
use norscope::io::MemoryStore;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for a full-size image with selected fields and tables filled in.
pub struct ImageBuilder {
    data: Vec<u8>,
}

impl ImageBuilder {
    /// A full image filled with erased-flash bytes.
    pub fn new() -> Self {
        Self {
            data: vec![0xFF; NOR_DUMP_SIZE as usize],
        }
    }

    pub fn bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Sets both copies of a catalog field.
    pub fn field(self, key: &str, value: &[u8]) -> Self {
        let desc = lookup_field(key).unwrap();
        assert_eq!(value.len(), desc.length as usize, "bad test value for {}", key);
        let offset = desc.offset as usize;
        let backup = desc.backup_offset() as usize;
        self.bytes(offset, value).bytes(backup, value)
    }

    pub fn active_slot(self, raw: u8) -> Self {
        self.bytes(0x1000, &[raw])
    }

    /// Writes a version 4 table at `base` with the given records.
    pub fn table(mut self, base: usize, records: &[PartitionRecord]) -> Self {
        let mut table = vec![0u8; 0x1000];
        table[..TOC_MAGIC_LEN].copy_from_slice(TOC_MAGIC);
        table[0x20..0x24].copy_from_slice(&4u32.to_le_bytes());
        table[0x24..0x28].copy_from_slice(&0x10000u32.to_le_bytes());
        for (i, r) in records.iter().enumerate() {
            let at = TOC_PARTITIONS_OFFSET + i * PARTITION_RECORD_SIZE;
            table[at..at + PARTITION_RECORD_SIZE].copy_from_slice(&r.to_bytes());
        }
        self.data[base..base + 0x1000].copy_from_slice(&table);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }

    pub fn store(self) -> MemoryStore {
        MemoryStore::new(self.data)
    }
}

/// Records resembling a retail section 0 table.
pub fn retail_records() -> Vec<PartitionRecord> {
    let rec = |start_lba, n_sectors, type_code| PartitionRecord {
        start_lba,
        n_sectors,
        type_code,
        ..Default::default()
    };
    let mut records = vec![
        rec(0x20, 0x300, 32),
        rec(0x320, 0x300, 32),
        rec(0x620, 0x400, 33),
        rec(0xA20, 0x400, 38),
        rec(0xE20, 0x60, 34),
        rec(0xE80, 0x180, 40),
    ];
    records.resize(16, PartitionRecord::default());
    records
}

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}
