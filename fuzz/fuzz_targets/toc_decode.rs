#![no_main]
use libfuzzer_sys::fuzz_target;
use norscope::formats::toc::{decode_table, decode_toc};
use norscope::io::MemoryStore;

fuzz_target!(|data: &[u8]| {
    let _ = decode_table(data);
    let _ = decode_toc(&mut MemoryStore::new(data.to_vec()));
});
