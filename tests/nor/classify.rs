use crate::common::ImageBuilder;
use norscope::classify::{
    describe_switch, match_pattern, partition_fingerprint, slot_switch_info, south_bridge,
    torus_version, PatternMatch, ReferenceData, SouthBridge, SwitchType, SWITCH_PATTERNS,
};
use norscope::config::NorConfig;

#[test]
fn switch_pattern_uses_first_declared_match() {
    let mut blob = [0xFFu8; 16];
    blob[8..].fill(0x00);
    let mut store = ImageBuilder::new().bytes(0x201000, &blob).store();

    let m = slot_switch_info(&mut store).unwrap();
    assert_eq!(
        m,
        PatternMatch::Matched {
            tag: SwitchType::Fat10xx11xx,
            index: 1
        }
    );
    assert_eq!(describe_switch(&m), "Fat 10xx/11xx [#1]");
}

#[test]
fn every_switch_pattern_resolves_to_its_own_index() {
    for (i, p) in SWITCH_PATTERNS.iter().enumerate() {
        match match_pattern(p.bytes, &SWITCH_PATTERNS) {
            PatternMatch::Matched { tag, index } => {
                assert_eq!(index, i + 1);
                assert_eq!(tag, p.tag);
            }
            other => panic!("pattern {} unmatched: {:?}", i, other),
        }
    }
}

#[test]
fn unrecognized_switch_shows_raw_hex() {
    let mut store = ImageBuilder::new()
        .bytes(0x201000, &[0x01, 0x02, 0x03, 0x04])
        .store();
    let text = describe_switch(&slot_switch_info(&mut store).unwrap());
    assert_eq!(text, "Off 01020304FFFFFFFFFFFFFFFFFFFFFFFF");
}

#[test]
fn fingerprint_tables_from_json_config() {
    let mut store = ImageBuilder::new()
        .bytes(0x4000, b"EMC IPL build A")
        .bytes(0xC4000, b"EAP KBL build A")
        .bytes(0x144000, b"torus fw")
        .store();
    let emc = partition_fingerprint(&mut store, "s0_emc_ipl_a").unwrap().unwrap();
    let eap = partition_fingerprint(&mut store, "s0_eap_kbl").unwrap().unwrap();
    let torus = partition_fingerprint(&mut store, "s0_wifi").unwrap().unwrap();

    let json = format!(
        r#"{{
            "fingerprints": {{
                "torus": [ {{ "digest": "{torus}", "tag": 48 }} ],
                "emc_ipl": [ {{ "digest": "{emc}", "tag": 42, "note": "sample" }} ],
                "eap_kbl": [ {{ "digest": "{eap}", "tag": 43 }} ]
            }}
        }}"#
    );
    let config = NorConfig::from_json_str(&json).unwrap();
    let refs = ReferenceData::from_config(&config);

    assert_eq!(
        south_bridge(&mut store, &refs).unwrap(),
        SouthBridge::Known("Belize 2 A0")
    );
    assert_eq!(torus_version(&mut store, &refs).unwrap(), Some("Version 3"));
}

#[test]
fn unknown_fingerprints_degrade_to_sentinels() {
    let mut store = ImageBuilder::new().store();
    let refs = ReferenceData::default();
    assert_eq!(
        south_bridge(&mut store, &refs).unwrap().to_string(),
        "[0x00, 0x00]"
    );
    assert_eq!(torus_version(&mut store, &refs).unwrap(), None);
}
