//! Classification of field values and partition contents.
//!
//! Classification is advisory: a value that matches nothing yields an
//! "unrecognized" result carrying the raw data, never an error. Only store
//! failures propagate.

pub mod fingerprint;
pub mod patterns;
pub mod values;

use crate::error::Result;
use crate::field::read_key;
use crate::io::ByteStore;

pub use fingerprint::{
    partition_fingerprint, resolve_south_bridge, south_bridge, torus_version, FingerprintTable,
    ReferenceData, SouthBridge,
};
pub use patterns::{
    describe_switch, match_pattern, PatternMatch, ReferencePattern, SwitchType, SWITCH_PATTERNS,
};
pub use values::{
    boot_mode, check_partition_magic, console_region, firmware_version, BootMode, ConsoleRegion,
    FirmwareVersion,
};

/// Classifies the slot-switch hack pattern in `CORE_SWCH`.
pub fn slot_switch_info<S: ByteStore + ?Sized>(store: &mut S) -> Result<PatternMatch<SwitchType>> {
    let observed = read_key(store, "CORE_SWCH")?;
    Ok(match_pattern(&observed, &SWITCH_PATTERNS))
}
