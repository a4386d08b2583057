//! High-level view over a NOR image held in any [`ByteStore`].

use crate::catalog;
use crate::classify::{self, BootMode, ConsoleRegion, FirmwareVersion, ReferenceData};
use crate::config::{NorConfig, ValidationConfig};
use crate::error::{NorError, Result};
use crate::field;
use crate::formats::toc::{self, TableOfContents};
use crate::io::{self, ByteStore, FileStore};
use bytes::Bytes;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// A NOR image bound to its backing store.
pub struct NorImage<S: ByteStore> {
    store: S,
}

impl NorImage<FileStore> {
    /// Opens an image file for in-place editing.
    pub fn open_file<P: AsRef<Path>>(path: P, config: &NorConfig) -> Result<Self> {
        let store = FileStore::open_rw(path)?;
        Self::new(store, &config.validation)
    }
}

impl<S: ByteStore> NorImage<S> {
    pub fn new(store: S, validation: &ValidationConfig) -> Result<Self> {
        validation.check(&store)?;
        Ok(Self { store })
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn field(&mut self, key: &str) -> Result<Bytes> {
        field::read_key(&mut self.store, key)
    }

    pub fn field_backup(&mut self, key: &str) -> Result<Bytes> {
        field::read_key_backup(&mut self.store, key)
    }

    pub fn set_field(&mut self, key: &str, data: &[u8]) -> Result<()> {
        field::write_key(&mut self.store, key, data)
    }

    pub fn set_field_backup(&mut self, key: &str, data: &[u8]) -> Result<()> {
        field::write_key_backup(&mut self.store, key, data)
    }

    /// Writes both the primary and backup copy of a field.
    ///
    /// Both ranges are validated first, so a rejected call leaves the store
    /// untouched.
    pub fn set_field_both(&mut self, key: &str, data: &[u8]) -> Result<()> {
        let desc = catalog::field(key)?;
        if data.len() != desc.length as usize {
            return Err(NorError::LengthMismatch {
                key: key.to_string(),
                expected: desc.length as usize,
                found: data.len(),
            });
        }
        let size = self.store.len();
        io::check_range(desc.offset as u64, desc.length as u64, size)?;
        io::check_range(desc.backup_offset(), desc.length as u64, size)?;
        field::write_field(&mut self.store, desc, data)?;
        field::write_field_backup(&mut self.store, desc, data)
    }

    pub fn text(&mut self, key: &str) -> Result<String> {
        field::read_text(&mut self.store, catalog::field(key)?)
    }

    pub fn toc(&mut self) -> Result<TableOfContents> {
        toc::decode_toc(&mut self.store)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()?;
        Ok(())
    }

    /// Collects identity, configuration and partition information.
    pub fn summary(&mut self, refs: &ReferenceData) -> Result<ImageSummary> {
        let mac = self.field("MAC")?;
        let summary = ImageSummary {
            serial: self.text("SN")?,
            motherboard_serial: self.text("MB_SN")?,
            sku: self.text("SKU")?,
            region: classify::console_region(&mut self.store)?,
            mac: format_mac(&mac),
            boot_mode: classify::boot_mode(&mut self.store)?,
            firmware: classify::firmware_version(&mut self.store)?,
            slot_switch: classify::describe_switch(&classify::slot_switch_info(&mut self.store)?),
            south_bridge: classify::south_bridge(&mut self.store, refs)?.to_string(),
            torus: classify::torus_version(&mut self.store, refs)?,
            header_magic_ok: classify::check_partition_magic(&mut self.store, "s0_header")?,
            toc: self.toc()?,
        };
        info!(serial = %summary.serial, sku = %summary.sku, "Summarized image");
        Ok(summary)
    }
}

fn format_mac(raw: &[u8]) -> String {
    raw.iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Serializable snapshot of an image's decoded contents.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSummary {
    pub serial: String,
    pub motherboard_serial: String,
    pub sku: String,
    pub region: ConsoleRegion,
    pub mac: String,
    pub boot_mode: BootMode,
    pub firmware: FirmwareVersion,
    pub slot_switch: String,
    pub south_bridge: String,
    pub torus: Option<&'static str>,
    pub header_magic_ok: bool,
    pub toc: TableOfContents,
}

impl ImageSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NorError::Config(e.to_string()))
    }
}
