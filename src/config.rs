//! Configuration for image loading and classification.
//!
//! The fingerprint tables map content digests of well-known partitions to
//! numeric tags. They are collected from real dumps and therefore supplied by
//! the caller, typically as a JSON file; the defaults are empty, in which case
//! every fingerprint classifies as unknown.

use crate::catalog::NOR_DUMP_SIZE;
use crate::error::{NorError, Result};
use crate::io::ByteStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NorConfig {
    /// Reference fingerprints for partition identification.
    pub fingerprints: FingerprintConfig,
    /// Checks applied when an image is opened.
    pub validation: ValidationConfig,
}

impl NorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NorError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| NorError::Config(e.to_string()))
    }

    /// Loads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            torus = config.fingerprints.torus.len(),
            emc_ipl = config.fingerprints.emc_ipl.len(),
            eap_kbl = config.fingerprints.eap_kbl.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// One known partition digest and the tag it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintEntry {
    /// Hex MD5 of the partition contents (case-insensitive).
    pub digest: String,
    pub tag: u8,
    /// Free-form note, e.g. the firmware release the payload came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Reference fingerprint tables, one per identified partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Digests of `s0_wifi` (Torus firmware).
    pub torus: Vec<FingerprintEntry>,
    /// Digests of `s0_emc_ipl_a`.
    pub emc_ipl: Vec<FingerprintEntry>,
    /// Digests of `s0_eap_kbl`.
    pub eap_kbl: Vec<FingerprintEntry>,
}

/// Image validation switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject stores whose size differs from a full NOR dump.
    pub require_full_image: bool,
}

impl ValidationConfig {
    pub fn check<S: ByteStore + ?Sized>(&self, store: &S) -> Result<()> {
        let found = store.len();
        if found != NOR_DUMP_SIZE {
            if self.require_full_image {
                return Err(NorError::InvalidImageSize {
                    expected: NOR_DUMP_SIZE,
                    found,
                });
            }
            warn!(found, expected = NOR_DUMP_SIZE, "Image is not a full NOR dump");
        }
        Ok(())
    }
}
