//! Random-access byte stores backing a NOR image.
//!
//! Everything above this module talks to a [`ByteStore`]; the adapters here
//! cover an in-memory buffer, a regular file opened for reading or editing,
//! and a read-only memory map. Reads are all-or-nothing: a request that runs
//! past the end of the store fails with [`StoreError::OutOfRange`] instead of
//! returning a short buffer.

pub mod error;

use crate::io::error::{Result, StoreError};
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// A readable/writable random-access byte store.
///
/// Methods take `&mut self`; callers doing read-modify-write sequences hold
/// exclusive access for the whole sequence.
pub trait ByteStore {
    /// Total addressable size in bytes.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads exactly `length` bytes starting at `offset`.
    ///
    /// Requests past the end fail with `OutOfRange`; short reads are never returned.
    fn read(&mut self, offset: u64, length: u64) -> Result<Bytes>;

    /// Overwrites `data.len()` bytes starting at `offset`.
    ///
    /// Stores never grow; writes past the end fail with `OutOfRange`.
    fn write(&mut self, offset: u64, data: &[u8]) -> Result<()>;

    /// Pushes buffered writes to the underlying medium.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Validates that `offset..offset+length` lies inside a store of `size` bytes.
pub fn check_range(offset: u64, length: u64, size: u64) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= size => Ok(()),
        _ => {
            warn!(offset, length, size, "Request outside store bounds");
            Err(StoreError::OutOfRange {
                offset,
                length,
                size,
            })
        }
    }
}

/// An image held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    data: Vec<u8>,
}

impl MemoryStore {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// A store of `size` bytes, all set to `fill`.
    pub fn filled(size: usize, fill: u8) -> Self {
        Self {
            data: vec![fill; size],
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for MemoryStore {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ByteStore for MemoryStore {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read(&mut self, offset: u64, length: u64) -> Result<Bytes> {
        check_range(offset, length, self.len())?;
        let start = offset as usize;
        let end = start + length as usize;
        trace!(offset, length, "MemoryStore read");
        Ok(Bytes::copy_from_slice(&self.data[start..end]))
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        check_range(offset, data.len() as u64, self.len())?;
        let start = offset as usize;
        self.data[start..start + data.len()].copy_from_slice(data);
        trace!(offset, length = data.len(), "MemoryStore write");
        Ok(())
    }
}

/// A store backed by a regular file, accessed with seek + read/write.
pub struct FileStore {
    path: PathBuf,
    file: File,
    size: u64,
    writable: bool,
}

impl FileStore {
    /// Opens a file for reading only; writes fail with `ReadOnly`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_file(path, file, false)
    }

    /// Opens an existing file for reading and in-place editing.
    pub fn open_rw<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::from_file(path, file, true)
    }

    fn from_file(path: &Path, file: File, writable: bool) -> Result<Self> {
        let size = file.metadata()?.len();
        debug!(
            path = %path.display(),
            size,
            writable,
            "Opened file store"
        );
        Ok(Self {
            path: path.to_path_buf(),
            file,
            size,
            writable,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

impl ByteStore for FileStore {
    fn len(&self) -> u64 {
        self.size
    }

    fn read(&mut self, offset: u64, length: u64) -> Result<Bytes> {
        check_range(offset, length, self.size)?;
        let mut buf = vec![0u8; length as usize];
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(&mut buf)?;
        trace!(path = %self.path.display(), offset, length, "FileStore read");
        Ok(Bytes::from(buf))
    }

    fn write(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        if !self.writable {
            return Err(StoreError::ReadOnly);
        }
        check_range(offset, data.len() as u64, self.size)?;
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;
        trace!(path = %self.path.display(), offset, length = data.len(), "FileStore write");
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

/// A read-only store over a memory-mapped file.
pub struct MappedStore {
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
}

impl MappedStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        debug!(path = %path.display(), size, "Mapping image");

        let mmap = if size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file; the image is not expected
            // to be truncated by another process while mapped.
            Some(unsafe { Mmap::map(&file)? })
        };
        Ok(Self { mmap })
    }
}

impl ByteStore for MappedStore {
    fn len(&self) -> u64 {
        self.mmap.as_ref().map_or(0, |m| m.len() as u64)
    }

    fn read(&mut self, offset: u64, length: u64) -> Result<Bytes> {
        check_range(offset, length, self.len())?;
        let map = match &self.mmap {
            Some(m) => m,
            None => return Ok(Bytes::new()),
        };
        let start = offset as usize;
        Ok(Bytes::copy_from_slice(&map[start..start + length as usize]))
    }

    fn write(&mut self, _offset: u64, _data: &[u8]) -> Result<()> {
        Err(StoreError::ReadOnly)
    }
}
