//! Fixed-offset fields of the NOR image.

use super::{FieldDescriptor, ValueKind};

const fn b(key: &'static str, offset: u32, length: u32, name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(key, offset, length, ValueKind::Bytes, name)
}

const fn s(key: &'static str, offset: u32, length: u32, name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(key, offset, length, ValueKind::Text, name)
}

/// All known fields, in declaration order.
pub static NOR_FIELDS: &[FieldDescriptor] = &[
    b("ACT_SLOT", 0x001000, 1, "Active slot"), // 0x00 A, 0x80 B
    b("MAC", 0x1C4021, 6, "MAC Address"),
    s("MB_SN", 0x1C8000, 16, "Motherboard Serial"),
    s("SN", 0x1C8030, 17, "Console Serial"),
    s("SKU", 0x1C8041, 13, "SKU Version"),
    s("REGION", 0x1C8047, 2, "Region code"),
    b("BOOT_MODE", 0x1C9000, 1, "Boot mode"), // Development(FE), Assist(FB), Release(FF)
    b("MEM_BGM", 0x1C9003, 1, "Memory budget mode"), // Large(FE), Normal(FF)
    b("SLOW_HDD", 0x1C9005, 1, "HDD slow mode"), // On(FE), Off(FF)
    b("SAFE_BOOT", 0x1C9020, 1, "Safe boot"), // On(01), Off(00/FF)
    b("FW_MIN", 0x1C9062, 2, "Minimal FW version?"),
    b("FW_VER", 0x1C906A, 2, "FW in active slot"),
    b("SAMUBOOT", 0x1C9323, 1, "SAMU enc"),
    s("HDD", 0x1C9C00, 60, "HDD"),
    s("HDD_TYPE", 0x1C9C3C, 4, "HDD type"),
    b("SYS_FLAGS", 0x1C9310, 64, "System flags"), // clean: FF * 64
    b("MEMTEST", 0x1C9310, 1, "Memory test"), // On(01), Off(00/FF)
    b("RNG_KEY", 0x1C9312, 1, "RNG/Keystorage test"),
    b("UART", 0x1C931F, 1, "UART"), // On(01), Off(00)
    b("MEMCLK", 0x1C9320, 1, "GDDR5 Memory clock"),
    b("BTNSWAP", 0x1CA040, 1, "Buttons swap"), // X(01), O(00/FF)
    b("FW_C", 0x1CA5D8, 1, "FW Counter"),
    b("FW_PC", 0x1CA5D9, 1, "FW Patch Counter"),
    b("IDU", 0x1CA600, 1, "IDU (Kiosk mode)"), // On(01), Off(00/FF)
    b("UPD_MODE", 0x1CA601, 1, "Update mode"), // On(10), Off(00)
    b("REG_REC", 0x1CA603, 1, "Registry recovery"), // On(01), Off(00)
    s("FW_V", 0x1CA606, 2, "FW Version"),
    s("ARCADE", 0x1CA609, 1, "Arcade mode"), // On(01), Off(00/FF)
    b("MANU", 0x1CBC00, 32, "MANU mode"), // Enabled(00 * 32), Disabled(FF * 32)
    b("CORE_SWCH", 0x201000, 16, "Slot switch hack"),
];
