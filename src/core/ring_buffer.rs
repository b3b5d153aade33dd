//! Byte-oriented ring buffer with partial reads and writes
//!
//! Writes and reads are clipped to what fits: `put` stores as many bytes as
//! there is room for, `get` returns as many as are queued. The returned count
//! is the only signal, nothing here fails. A transfer that crosses the
//! physical end of storage is split into two copies.

use super::ring_state::{RingState, MAX_CAPACITY};
use super::storage::{self, Storage};
use crate::config::RingConfig;
use crate::error::Result;

/// Fixed-capacity byte ring buffer
///
/// Single owner, no internal synchronization. Storage is bound at init and
/// never reallocated.
pub struct RingBuffer<S: Storage = Box<[u8]>> {
    state: RingState,
    buffer: S,
}

/// Byte ring with its storage inline, for statically sized buffers
pub type InlineRingBuffer<const N: usize> = RingBuffer<[u8; N]>;

impl<S: Storage> RingBuffer<S> {
    /// Bind a ring of `capacity` bytes to `storage`
    ///
    /// Storage longer than `capacity` is allowed, the tail is left unused.
    pub fn init(capacity: usize, storage: S) -> Result<Self> {
        RingConfig::bytes(capacity).check_storage(storage.byte_len())?;
        tracing::debug!(capacity, "byte ring initialized");

        Ok(Self {
            state: RingState::new(capacity as u32),
            buffer: storage,
        })
    }

    /// Copy up to `reserve_size()` bytes from `data` into the ring
    ///
    /// Returns the number of bytes actually written; the rest of `data` is
    /// left for the caller to retry.
    #[inline]
    pub fn put(&mut self, data: &[u8]) -> usize {
        let len = data.len().min(self.state.reserve_size());
        if len == 0 {
            return 0;
        }

        let total_size = self.state.total_size();
        let wptr = self.state.write_offset();
        let buffer = &mut self.buffer.as_bytes_mut()[..total_size];

        // Handle wraparound
        let first_part = (total_size - wptr).min(len);
        buffer[wptr..wptr + first_part].copy_from_slice(&data[..first_part]);
        if first_part < len {
            buffer[..len - first_part].copy_from_slice(&data[first_part..len]);
        }

        self.state.produce(len as u32);
        len
    }

    /// Copy up to `out.len()` queued bytes into `out`, oldest first
    ///
    /// Returns the number of bytes read. `out` is untouched past that count,
    /// and entirely untouched when the ring is empty.
    #[inline]
    pub fn get(&mut self, out: &mut [u8]) -> usize {
        let len = out.len().min(self.state.size());
        if len == 0 {
            return 0;
        }

        let total_size = self.state.total_size();
        let rptr = self.state.read_offset();
        let buffer = &self.buffer.as_bytes()[..total_size];

        let first_part = (total_size - rptr).min(len);
        out[..first_part].copy_from_slice(&buffer[rptr..rptr + first_part]);
        if first_part < len {
            out[first_part..len].copy_from_slice(&buffer[..len - first_part]);
        }

        self.state.consume(len as u32);
        len
    }

    /// Drop up to `len` queued bytes without copying them out
    ///
    /// Returns the number of bytes discarded.
    #[inline]
    pub fn skip(&mut self, len: usize) -> usize {
        let len = len.min(self.state.size());
        if len > 0 {
            self.state.consume(len as u32);
        }
        len
    }

    /// Forget all queued bytes
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Capacity in bytes
    #[inline(always)]
    pub fn total_size(&self) -> usize {
        self.state.total_size()
    }

    /// Queued bytes
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.state.size()
    }

    /// Free bytes
    #[inline(always)]
    pub fn reserve_size(&self) -> usize {
        self.state.reserve_size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    /// Index bookkeeping, for diagnostics
    pub fn state(&self) -> &RingState {
        &self.state
    }

    /// Give back the storage
    pub fn into_storage(self) -> S {
        self.buffer
    }
}

impl RingBuffer<Box<[u8]>> {
    /// Ring with freshly allocated storage of `capacity` bytes
    ///
    /// The only allocation happens here.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let config = RingConfig::bytes(capacity);
        config.validate()?;
        Self::init(capacity, storage::boxed(config.storage_len()?))
    }
}

impl<const N: usize> RingBuffer<[u8; N]> {
    const CAPACITY: u32 = {
        assert!(N > 0, "RingBuffer capacity must be > 0");
        assert!(
            N <= MAX_CAPACITY,
            "RingBuffer capacity must leave headroom for doubled indices"
        );
        N as u32
    };

    /// Ring with its `N` bytes of storage co-located, usable in `const` and
    /// `static` items
    pub const fn new_inline() -> Self {
        Self {
            state: RingState::new(Self::CAPACITY),
            buffer: [0u8; N],
        }
    }
}

impl<const N: usize> Default for RingBuffer<[u8; N]> {
    fn default() -> Self {
        Self::new_inline()
    }
}

impl<S: Storage> std::fmt::Debug for RingBuffer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
