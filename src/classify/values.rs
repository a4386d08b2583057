//! Decoders for individual identity and configuration fields.

use crate::catalog::{self, STR_UNKNOWN};
use crate::error::Result;
use crate::field::{read_field, read_key, read_partition};
use crate::io::ByteStore;
use serde::Serialize;
use std::fmt;

/// Region codes stored in the `REGION` field.
pub const CONSOLE_REGIONS: &[(&str, &str)] = &[
    ("00", "Japan"),
    ("01", "US, Canada (North America)"),
    ("15", "US, Canada (North America)"),
    ("02", "Australia / New Zealand (Oceania)"),
    ("03", "U.K. / Ireland"),
    ("04", "Europe / Middle East / Africa"),
    ("16", "Europe / Middle East / Africa"),
    ("05", "Korea (South Korea)"),
    ("06", "Southeast Asia / Hong Kong"),
    ("07", "Taiwan"),
    ("08", "Russia, Ukraine, India, Central Asia"),
    ("09", "Mainland China"),
    ("11", "Mexico, Central America, South America"),
    ("14", "Mexico, Central America, South America"),
];

/// Magic strings expected at the start of some fixed partitions.
pub const PARTITION_MAGICS: &[(&str, usize, &[u8])] = &[
    ("s0_header", 0x00, b"SONY COMPUTER ENTERTAINMENT INC."),
    ("s0_MBR1", 0x00, b"Sony Computer Entertainment Inc."),
    ("s0_MBR2", 0x00, b"Sony Computer Entertainment Inc."),
];

pub fn region_description(code: &str) -> Option<&'static str> {
    CONSOLE_REGIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleRegion {
    pub code: String,
    pub description: Option<&'static str>,
}

impl ConsoleRegion {
    pub fn label(&self) -> &'static str {
        self.description.unwrap_or(STR_UNKNOWN)
    }
}

/// Reads and resolves the console region code.
pub fn console_region<S: ByteStore + ?Sized>(store: &mut S) -> Result<ConsoleRegion> {
    let raw = read_key(store, "REGION")?;
    // Undecodable bytes are dropped rather than replaced.
    let code: String = String::from_utf8_lossy(&raw)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect();
    let description = region_description(&code);
    Ok(ConsoleRegion { code, description })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BootMode {
    Development,
    Assist,
    Release,
    Unknown(u8),
}

impl BootMode {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0xFE => BootMode::Development,
            0xFB => BootMode::Assist,
            0xFF => BootMode::Release,
            other => BootMode::Unknown(other),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            BootMode::Development => 0xFE,
            BootMode::Assist => 0xFB,
            BootMode::Release => 0xFF,
            BootMode::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for BootMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootMode::Development => f.write_str("Development"),
            BootMode::Assist => f.write_str("Assist"),
            BootMode::Release => f.write_str("Release"),
            BootMode::Unknown(raw) => write!(f, "{} [{:02X}]", STR_UNKNOWN, raw),
        }
    }
}

pub fn boot_mode<S: ByteStore + ?Sized>(store: &mut S) -> Result<BootMode> {
    let raw = read_key(store, "BOOT_MODE")?;
    Ok(BootMode::from_raw(raw[0]))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirmwareVersion {
    /// Version of the firmware in the active slot, e.g. `"9.00"`.
    pub current: String,
    /// Minimum firmware version, when recorded.
    pub minimum: Option<String>,
}

fn format_fw(raw: &[u8]) -> String {
    format!("{:X}.{:02X}", raw[1], raw[0])
}

/// Reads the firmware version, falling back to `FW_VER` when `FW_V` is unset.
pub fn firmware_version<S: ByteStore + ?Sized>(store: &mut S) -> Result<FirmwareVersion> {
    let old_fw = read_key(store, "FW_V")?;
    let fw = if old_fw[0] == 0xFF {
        read_key(store, "FW_VER")?
    } else {
        old_fw
    };
    let min_fw = read_key(store, "FW_MIN")?;
    let minimum = (min_fw[0] != 0xFF).then(|| format_fw(&min_fw));
    Ok(FirmwareVersion {
        current: format_fw(&fw),
        minimum,
    })
}

/// Checks a fixed partition against its expected magic.
///
/// Partitions without a known magic, and unknown keys, report `false`.
pub fn check_partition_magic<S: ByteStore + ?Sized>(store: &mut S, key: &str) -> Result<bool> {
    let Some(&(_, offset, magic)) = PARTITION_MAGICS.iter().find(|(k, _, _)| *k == key) else {
        return Ok(false);
    };
    let desc = catalog::partition(key)?;
    let data = read_partition(store, desc)?;
    Ok(data.get(offset..offset + magic.len()) == Some(magic))
}

/// Reads a single-byte field, for flag-style settings.
pub fn read_flag<S: ByteStore + ?Sized>(store: &mut S, key: &str) -> Result<u8> {
    let desc = catalog::field(key)?;
    let raw = read_field(store, desc)?;
    Ok(raw[0])
}
