//! Little-endian field readers over byte buffers.

use crate::error::{NorError, Result};

fn array_at<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    data.get(offset..offset.saturating_add(N))
        .and_then(|s| s.try_into().ok())
        .ok_or(NorError::OutOfRange {
            offset: offset as u64,
            length: N as u64,
            size: data.len() as u64,
        })
}

/// Trait for reading packed little-endian values at explicit offsets
pub trait LeRead {
    fn read_u8(&self, offset: usize) -> Result<u8>;
    fn read_u16(&self, offset: usize) -> Result<u16>;
    fn read_u32(&self, offset: usize) -> Result<u32>;
    fn read_u64(&self, offset: usize) -> Result<u64>;
    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]>;
}

impl LeRead for [u8] {
    fn read_u8(&self, offset: usize) -> Result<u8> {
        array_at::<1>(self, offset).map(|b| b[0])
    }

    fn read_u16(&self, offset: usize) -> Result<u16> {
        array_at(self, offset).map(u16::from_le_bytes)
    }

    fn read_u32(&self, offset: usize) -> Result<u32> {
        array_at(self, offset).map(u32::from_le_bytes)
    }

    fn read_u64(&self, offset: usize) -> Result<u64> {
        array_at(self, offset).map(u64::from_le_bytes)
    }

    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        array_at(self, offset)
    }
}
