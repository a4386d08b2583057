//! Identification of partition payloads by content fingerprint.
//!
//! A fingerprint resolves to a small numeric tag through a caller-supplied
//! table; tags then map to labels through the static tables below. Paired
//! lookups combine the tags of two independent partitions.

use crate::catalog;
use crate::config::{FingerprintConfig, FingerprintEntry, NorConfig};
use crate::error::Result;
use crate::field::read_partition;
use crate::hashing::md5_digest;
use crate::io::ByteStore;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Torus (wifi/bluetooth) firmware generations by tag.
pub const TORUS_VERSIONS: &[(u8, &str)] = &[
    (0x03, "Version 1"),
    (0x22, "Version 2"),
    (0x30, "Version 3"),
];

/// South bridge revisions by (EMC IPL tag, EAP KBL tag).
pub const SOUTH_BRIDGES: &[(&str, [u8; 2])] = &[
    ("Aeolia A2", [0x0D, 0x0E]),
    ("Belize A0/B0", [0x20, 0x21]),
    ("Baikal B1", [0x24, 0x25]),
    ("Belize 2 A0", [0x2A, 0x2B]),
];

/// Digest-to-tag map. Digests are compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintTable {
    tags: HashMap<String, u8>,
}

impl FingerprintTable {
    pub fn from_entries(entries: &[FingerprintEntry]) -> Self {
        Self {
            tags: entries
                .iter()
                .map(|e| (e.digest.to_ascii_lowercase(), e.tag))
                .collect(),
        }
    }

    pub fn lookup(&self, digest: &str) -> Option<u8> {
        self.tags.get(&digest.to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Immutable reference tables shared by the fingerprint classifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub torus: FingerprintTable,
    pub emc_ipl: FingerprintTable,
    pub eap_kbl: FingerprintTable,
}

impl ReferenceData {
    pub fn from_fingerprints(config: &FingerprintConfig) -> Self {
        Self {
            torus: FingerprintTable::from_entries(&config.torus),
            emc_ipl: FingerprintTable::from_entries(&config.emc_ipl),
            eap_kbl: FingerprintTable::from_entries(&config.eap_kbl),
        }
    }

    pub fn from_config(config: &NorConfig) -> Self {
        Self::from_fingerprints(&config.fingerprints)
    }
}

/// Fingerprint of a fixed partition, or `None` if the key is not in the catalog.
pub fn partition_fingerprint<S: ByteStore + ?Sized>(
    store: &mut S,
    key: &str,
) -> Result<Option<String>> {
    let Some(desc) = catalog::lookup_partition(key) else {
        return Ok(None);
    };
    let data = read_partition(store, desc)?;
    let digest = md5_digest(&data);
    debug!(key, %digest, "Fingerprinted partition");
    Ok(Some(digest))
}

/// Tag of a partition's fingerprint, or 0 when it is not in `table`.
pub fn partition_tag<S: ByteStore + ?Sized>(
    store: &mut S,
    key: &str,
    table: &FingerprintTable,
) -> Result<u8> {
    Ok(partition_fingerprint(store, key)?
        .and_then(|digest| table.lookup(&digest))
        .unwrap_or(0))
}

/// Label of a Torus firmware tag.
pub fn torus_label(tag: u8) -> Option<&'static str> {
    TORUS_VERSIONS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, label)| *label)
}

/// Identifies the Torus firmware generation stored in `s0_wifi`.
pub fn torus_version<S: ByteStore + ?Sized>(
    store: &mut S,
    refs: &ReferenceData,
) -> Result<Option<&'static str>> {
    let tag = partition_tag(store, "s0_wifi", &refs.torus)?;
    Ok(torus_label(tag))
}

/// Outcome of the paired south bridge lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SouthBridge {
    Known(&'static str),
    Unrecognized { emc: u8, eap: u8 },
}

impl fmt::Display for SouthBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SouthBridge::Known(name) => f.write_str(name),
            SouthBridge::Unrecognized { emc, eap } => write!(f, "[0x{:02X}, 0x{:02X}]", emc, eap),
        }
    }
}

/// Resolves an (EMC IPL, EAP KBL) tag pair to a south bridge revision.
pub fn resolve_south_bridge(emc: u8, eap: u8) -> SouthBridge {
    SOUTH_BRIDGES
        .iter()
        .find(|(_, pair)| *pair == [emc, eap])
        .map_or(SouthBridge::Unrecognized { emc, eap }, |(name, _)| {
            SouthBridge::Known(*name)
        })
}

/// Identifies the south bridge from the EMC IPL and EAP KBL payloads.
pub fn south_bridge<S: ByteStore + ?Sized>(
    store: &mut S,
    refs: &ReferenceData,
) -> Result<SouthBridge> {
    let emc = partition_tag(store, "s0_emc_ipl_a", &refs.emc_ipl)?;
    let eap = partition_tag(store, "s0_eap_kbl", &refs.eap_kbl)?;
    let sb = resolve_south_bridge(emc, eap);
    debug!(emc, eap, south_bridge = %sb, "Resolved south bridge");
    Ok(sb)
}
