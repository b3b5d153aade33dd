//! Page-aligned anonymous memory as ring storage
//!
//! Large pools are easier on the allocator when their slots come straight
//! from the OS:
//! - Page-aligned base address, every slot starts on a predictable boundary
//! - Zero-filled by the kernel, no explicit clearing pass
//! - Lazily backed, untouched slots cost no resident memory
//!
//! The mapping is anonymous. Nothing is written to or read from disk.

use memmap2::{MmapMut, MmapOptions};

use super::Storage;
use crate::error::Result;

/// Anonymous read/write mapping owned by a single ring or pool
pub struct MappedRegion {
    mmap: MmapMut,
}

impl MappedRegion {
    /// Map `len` zeroed bytes
    ///
    /// # Arguments
    /// * `len` - Size of the region in bytes, must be non-zero
    pub fn anon(len: usize) -> Result<Self> {
        let mmap = MmapOptions::new().len(len).map_anon()?;
        tracing::debug!(len, "mapped anonymous ring storage");
        Ok(Self { mmap })
    }

    /// Length of the mapping in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl Storage for MappedRegion {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.mmap
    }
}

impl std::fmt::Debug for MappedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedRegion")
            .field("ptr", &self.mmap.as_ptr())
            .field("len", &self.mmap.len())
            .finish()
    }
}
