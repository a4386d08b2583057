use crate::common::{create_temp_file, retail_records, ImageBuilder};
use norscope::classify::{BootMode, ReferenceData};
use norscope::config::NorConfig;
use norscope::io::MemoryStore;
use norscope::{NorError, NorImage};

fn sample_image() -> ImageBuilder {
    ImageBuilder::new()
        .bytes(0, b"SONY COMPUTER ENTERTAINMENT INC.")
        .active_slot(0x00)
        .table(0x2000, &retail_records())
        .field("SN", b"C01234567890ABCDE")
        .field("MB_SN", b"1234567890ABCDEF")
        .field("SKU", b"CUH-1216A\0\0\0\0")
        .field("MAC", &[0x00, 0x1D, 0x0D, 0xAA, 0xBB, 0xCC])
        .field("BOOT_MODE", &[0xFE])
        .field("FW_VER", &[0x05, 0x05])
}

#[test]
fn summary_collects_decoded_values() {
    // REGION overlaps the tail of SKU, so it is written last.
    let store = sample_image().field("REGION", b"03").store();
    let mut image = NorImage::new(store, &NorConfig::default().validation).unwrap();
    let summary = image.summary(&ReferenceData::default()).unwrap();

    assert_eq!(summary.serial, "C01234567890ABCDE");
    assert_eq!(summary.motherboard_serial, "1234567890ABCDEF");
    assert_eq!(summary.region.code, "03");
    assert_eq!(summary.region.label(), "U.K. / Ireland");
    assert_eq!(summary.mac, "00:1D:0D:AA:BB:CC");
    assert_eq!(summary.boot_mode, BootMode::Development);
    assert_eq!(summary.firmware.current, "5.05");
    assert_eq!(summary.slot_switch, "Fat/Slim/PRO 12xx/2xxx/7xxx [#3]");
    assert_eq!(summary.south_bridge, "[0x00, 0x00]");
    assert!(summary.header_magic_ok);
    assert_eq!(summary.toc.non_empty().count(), 5);

    let json = summary.to_json().unwrap();
    assert!(json.contains("\"serial\": \"C01234567890ABCDE\""));
}

#[test]
fn strict_config_rejects_short_image() {
    let config = NorConfig::from_json_str(r#"{ "validation": { "require_full_image": true } }"#)
        .unwrap();
    let result = NorImage::new(MemoryStore::filled(0x1000, 0xFF), &config.validation);
    assert!(matches!(result, Err(NorError::InvalidImageSize { .. })));
}

#[test]
fn edits_persist_to_file() {
    let file = create_temp_file(&sample_image().build());
    let config = NorConfig::default();
    {
        let mut image = NorImage::open_file(file.path(), &config).unwrap();
        image.set_field_both("BOOT_MODE", &[0xFF]).unwrap();
        image.flush().unwrap();
    }
    let mut image = NorImage::open_file(file.path(), &config).unwrap();
    assert_eq!(image.field("BOOT_MODE").unwrap(), &[0xFFu8][..]);
    assert_eq!(image.field_backup("BOOT_MODE").unwrap(), &[0xFFu8][..]);
    assert_eq!(image.toc().unwrap().table_base_offset, 0x2000);
}
