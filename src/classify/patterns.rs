//! Exact-match classification of field contents.

use serde::Serialize;
use std::fmt;

/// A byte sequence that identifies a known value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePattern<T> {
    pub bytes: &'static [u8],
    pub tag: T,
}

/// Result of matching observed bytes against a pattern list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PatternMatch<T> {
    /// `index` is the 1-based position of the matching pattern.
    Matched { tag: T, index: usize },
    Unrecognized { hex: String },
}

/// Returns the first pattern equal to `observed`.
///
/// Order matters: when several patterns share a tag the earliest one wins.
pub fn match_pattern<T: Copy>(
    observed: &[u8],
    patterns: &[ReferencePattern<T>],
) -> PatternMatch<T> {
    patterns
        .iter()
        .position(|p| p.bytes == observed)
        .map(|i| PatternMatch::Matched {
            tag: patterns[i].tag,
            index: i + 1,
        })
        .unwrap_or_else(|| PatternMatch::Unrecognized {
            hex: hex::encode_upper(observed),
        })
}

/// Kinds of slot-switch hack found in `CORE_SWCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwitchType {
    Off,
    Fat10xx11xx,
    FatSlimPro,
    General,
}

impl SwitchType {
    pub fn label(&self) -> &'static str {
        match self {
            SwitchType::Off => "Off",
            SwitchType::Fat10xx11xx => "Fat 10xx/11xx",
            SwitchType::FatSlimPro => "Fat/Slim/PRO 12xx/2xxx/7xxx",
            SwitchType::General => "General",
        }
    }
}

impl fmt::Display for SwitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn split16(head_len: usize, head: u8, tail: u8) -> [u8; 16] {
    let mut out = [tail; 16];
    let mut i = 0;
    while i < head_len {
        out[i] = head;
        i += 1;
    }
    out
}

const FF8_ZERO8: [u8; 16] = split16(8, 0xFF, 0x00);
const ZERO8_FF8: [u8; 16] = split16(8, 0x00, 0xFF);
const FF16: [u8; 16] = [0xFF; 16];
const ZERO16: [u8; 16] = [0x00; 16];
const FF4_ZERO12: [u8; 16] = split16(4, 0xFF, 0x00);
const ZERO4_FF12: [u8; 16] = split16(4, 0x00, 0xFF);
const FF12_ZERO4: [u8; 16] = split16(12, 0xFF, 0x00);
const ZERO12_FF4: [u8; 16] = split16(12, 0x00, 0xFF);

/// Known slot-switch blobs, in match priority order.
pub static SWITCH_PATTERNS: [ReferencePattern<SwitchType>; 8] = [
    ReferencePattern { bytes: &FF8_ZERO8, tag: SwitchType::Fat10xx11xx },
    ReferencePattern { bytes: &ZERO8_FF8, tag: SwitchType::Fat10xx11xx },
    ReferencePattern { bytes: &FF16, tag: SwitchType::FatSlimPro },
    ReferencePattern { bytes: &ZERO16, tag: SwitchType::FatSlimPro },
    ReferencePattern { bytes: &FF4_ZERO12, tag: SwitchType::General },
    ReferencePattern { bytes: &ZERO4_FF12, tag: SwitchType::General },
    ReferencePattern { bytes: &FF12_ZERO4, tag: SwitchType::General },
    ReferencePattern { bytes: &ZERO12_FF4, tag: SwitchType::General },
];

/// Renders a switch match as `"<type> [#n]"`, or `"Off <HEX>"` when unknown.
pub fn describe_switch(m: &PatternMatch<SwitchType>) -> String {
    match m {
        PatternMatch::Matched { tag, index } => format!("{} [#{}]", tag, index),
        PatternMatch::Unrecognized { hex } => format!("{} {}", SwitchType::Off, hex),
    }
}
