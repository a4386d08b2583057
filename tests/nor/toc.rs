use crate::common::{retail_records, ImageBuilder};
use norscope::catalog::lookup_partition;
use norscope::formats::toc::{decode_toc, PartitionRecord, Slot, TocHeader};
use norscope::NorError;

#[test]
fn decodes_all_sixteen_slots_in_record_order() {
    let records: Vec<_> = (0..16u32)
        .map(|i| PartitionRecord {
            start_lba: i * 0x1000 + 7,
            n_sectors: 0x10 + i,
            type_code: (i * 3) as u8,
            flag: i as u8,
            unknown: 0xAAAA,
            padding: u64::MAX,
        })
        .collect();
    let mut store = ImageBuilder::new()
        .active_slot(0x00)
        .table(0x2000, &records)
        .store();

    let toc = decode_toc(&mut store).unwrap();
    assert_eq!(toc.partitions.len(), 16);
    for (i, (p, r)) in toc.partitions.iter().zip(&records).enumerate() {
        assert_eq!(p.index, i);
        assert_eq!(p.offset, r.start_lba as u64 * 512);
        assert_eq!(p.size, r.n_sectors as u64 * 512);
        assert_eq!(p.type_code, r.type_code);
        assert_eq!(p.flag, r.flag);
    }
}

#[test]
fn retail_table_matches_fixed_layout() {
    let mut store = ImageBuilder::new()
        .active_slot(0x00)
        .table(0x2000, &retail_records())
        .store();
    let toc = decode_toc(&mut store).unwrap();

    assert_eq!(toc.header.version(), 4);
    assert!(matches!(toc.header, TocHeader::V4 { n_sectors: 0x10000, .. }));

    let wifi = toc.partitions.iter().find(|p| p.name == "wifi").unwrap();
    let fixed = lookup_partition("s0_wifi").unwrap();
    assert_eq!(wifi.offset, fixed.offset as u64);
    assert_eq!(wifi.size, fixed.length as u64);

    let names: Vec<_> = toc.non_empty().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["emc_ipl", "emc_ipl", "eap_kbl", "wifi", "nvs"]);
}

#[test]
fn active_slot_selects_table_copy() {
    let slot_a = vec![PartitionRecord { type_code: 1, ..Default::default() }];
    let slot_b = vec![PartitionRecord { type_code: 99, ..Default::default() }];
    let build = |raw| {
        ImageBuilder::new()
            .active_slot(raw)
            .table(0x2000, &slot_a)
            .table(0x3000, &slot_b)
            .store()
    };

    let toc = decode_toc(&mut build(0x00)).unwrap();
    assert_eq!(toc.slot, Slot::A);
    assert_eq!(toc.table_base_offset, 0x2000);
    assert_eq!(toc.partitions[0].name, "idstorage");

    for raw in [0x80u8, 0x01, 0x40, 0xFF] {
        let toc = decode_toc(&mut build(raw)).unwrap();
        assert_eq!(toc.slot, Slot::B, "raw {:#x}", raw);
        assert_eq!(toc.table_base_offset, 0x3000);
        assert_eq!(toc.partitions[0].name, "Unk_99");
        assert_eq!(toc.partitions[0].type_code, 99);
    }
}

#[test]
fn redecoding_sees_store_changes() {
    let mut store = ImageBuilder::new()
        .active_slot(0x00)
        .table(0x2000, &retail_records())
        .store();
    let first = decode_toc(&mut store).unwrap();

    use norscope::io::ByteStore;
    store.write(0x1000, &[0x80]).unwrap();
    let second = decode_toc(&mut store).unwrap();
    assert_ne!(first.table_base_offset, second.table_base_offset);
}

#[test]
fn truncated_image_is_an_error() {
    let data = ImageBuilder::new()
        .active_slot(0x80)
        .table(0x3000, &retail_records())
        .build();
    let mut store = norscope::io::MemoryStore::new(data[..0x3100].to_vec());
    assert!(matches!(decode_toc(&mut store), Err(NorError::OutOfRange { .. })));
}

#[test]
fn toc_serializes_to_json() {
    let mut store = ImageBuilder::new()
        .active_slot(0x00)
        .table(0x2000, &retail_records())
        .store();
    let toc = decode_toc(&mut store).unwrap();
    let json = serde_json::to_value(&toc).unwrap();
    assert_eq!(json["table_base_offset"], 0x2000);
    assert_eq!(json["partitions"].as_array().unwrap().len(), 16);
    assert_eq!(json["partitions"][3]["name"], "wifi");
}
