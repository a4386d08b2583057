use crate::common::{create_temp_file, ImageBuilder};
use norscope::catalog::{lookup_field, NOR_FIELDS};
use norscope::field::{read_field, read_field_backup, read_key, write_field, write_key};
use norscope::io::{ByteStore, FileStore, MemoryStore};
use norscope::NorError;

#[test]
fn read_then_write_leaves_image_unchanged() {
    let data: Vec<u8> = ImageBuilder::new()
        .field("SN", b"A1234567890123456")
        .field("MAC", &[1, 2, 3, 4, 5, 6])
        .build()
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ (i as u8))
        .collect();
    let mut store = MemoryStore::new(data.clone());

    for desc in NOR_FIELDS {
        let value = read_field(&mut store, desc).unwrap();
        write_field(&mut store, desc, &value).unwrap();
    }
    assert!(store.as_slice() == data.as_slice());
}

#[test]
fn backup_copy_is_mirrored_at_fixed_delta() {
    let mut store = ImageBuilder::new().field("SKU", b"CUH-2216B\0\0\0\0").store();
    let sku = lookup_field("SKU").unwrap();
    assert_eq!(
        read_field(&mut store, sku).unwrap(),
        read_field_backup(&mut store, sku).unwrap()
    );
    assert_eq!(sku.backup_offset(), sku.offset as u64 + 0x3000);
}

#[test]
fn wrong_length_write_is_rejected_before_writing() {
    let mut store = ImageBuilder::new().store();
    let snapshot = store.clone();
    for len in [0usize, 5, 7, 64] {
        let err = write_key(&mut store, "MAC", &vec![0u8; len]).unwrap_err();
        assert!(matches!(err, NorError::LengthMismatch { expected: 6, .. }));
    }
    assert!(store == snapshot);
}

#[test]
fn unknown_key_is_not_found() {
    let mut store = MemoryStore::filled(16, 0);
    assert!(matches!(read_key(&mut store, "XYZ"), Err(NorError::NotFound(_))));
}

#[test]
fn file_store_round_trip() {
    let file = create_temp_file(&ImageBuilder::new().build());
    {
        let mut store = FileStore::open_rw(file.path()).unwrap();
        write_key(&mut store, "BOOT_MODE", &[0xFE]).unwrap();
        store.flush().unwrap();
    }
    let mut store = FileStore::open(file.path()).unwrap();
    assert_eq!(read_key(&mut store, "BOOT_MODE").unwrap(), &[0xFEu8][..]);
    assert!(matches!(
        write_key(&mut store, "BOOT_MODE", &[0xFF]),
        Err(NorError::ReadOnly)
    ));
}
