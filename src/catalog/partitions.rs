//! Fixed partition layout of both flash sections.

use super::PartitionDescriptor;

const fn p(key: &'static str, offset: u32, length: u32, name: &'static str) -> PartitionDescriptor {
    PartitionDescriptor::new(key, offset, length, name)
}

/// All fixed partitions, in image order.
pub static NOR_PARTITIONS: &[PartitionDescriptor] = &[
    p("s0_header", 0x00000000, 0x1000, "s0_head"),
    p("s0_active_slot", 0x00001000, 0x1000, "s0_act_slot"),
    p("s0_MBR1", 0x00002000, 0x1000, "s0_mbr1"),
    p("s0_MBR2", 0x00003000, 0x1000, "s0_mbr2"),
    p("s0_emc_ipl_a", 0x00004000, 0x60000, "sflash0s0x32"),
    p("s0_emc_ipl_b", 0x00064000, 0x60000, "sflash0s0x32b"),
    p("s0_eap_kbl", 0x000C4000, 0x80000, "sflash0s0x33"),
    p("s0_wifi", 0x00144000, 0x80000, "sflash0s0x38"),
    p("s0_nvs", 0x001C4000, 0xC000, "sflash0s0x34"),
    p("s0_blank", 0x001D0000, 0x30000, "sflash0s0x0"),
    p("s1_header", 0x00200000, 0x1000, "s1_head.crypt"),
    p("s1_active_slot", 0x00201000, 0x1000, "s1_act_slot.crypt"),
    p("s1_MBR1", 0x00202000, 0x1000, "s1_mbr1.crypt"),
    p("s1_MBR2", 0x00203000, 0x1000, "s1_mbr2.crypt"),
    p("s1_samu_ipl_a", 0x00204000, 0x3E000, "sflash0s1.cryptx2"),
    p("s1_samu_ipl_b", 0x00242000, 0x3E000, "sflash0s1.cryptx2b"),
    p("s1_idata", 0x00280000, 0x80000, "sflash0s1.cryptx1"),
    p("s1_bd_hrl", 0x00300000, 0x80000, "sflash0s1.cryptx39"),
    p("s1_VTRM", 0x00380000, 0x40000, "sflash0s1.cryptx6"),
    p("s1_CoreOS_A", 0x003C0000, 0xCC0000, "sflash0s1.cryptx3"),
    p("s1_CoreOS_B", 0x01080000, 0xCC0000, "sflash0s1.cryptx3b"),
    p("s1_blank", 0x01D40000, 0x2C0000, "sflash0s1.cryptx40"),
];
