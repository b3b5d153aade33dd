//! Fixed-size slot pool on top of the data ring
//!
//! The pool's free list is a [`DataRingBuffer`] whose items are slot indices.
//! At init every slot index is enqueued, so a fresh pool is full: full means
//! every slot is free to acquire, empty means every slot is handed out.
//!
//! Acquire (`dequeue`) pops an index off the free list and wraps it in a
//! [`SlotHandle`]; release (`enqueue`) pushes it back. Slots come back in
//! FIFO order of release. Slot contents are never cleared between cycles.

use super::data_ring_buffer::DataRingBuffer;
use super::storage::{self, Storage};
use super::MappedRegion;
use crate::config::PoolConfig;
use crate::error::Result;

/// Bytes per free-list entry (a little-endian `u32` slot index)
pub const HANDLE_SIZE: usize = std::mem::size_of::<u32>();

/// Exclusive claim on one pool slot
///
/// Not `Clone`: releasing a handle consumes it, so the same handle cannot be
/// released twice.
#[derive(Debug, PartialEq, Eq)]
pub struct SlotHandle {
    index: u32,
}

impl SlotHandle {
    /// Position of the slot within the pool
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// Pool of `total_cnt` slots of `item_size` bytes
///
/// `S` backs the slots, `F` backs the free list (`total_cnt * HANDLE_SIZE`
/// bytes).
pub struct ObjectPool<S: Storage = Box<[u8]>, F: Storage = Box<[u8]>> {
    slots: S,
    item_size: usize,
    free: DataRingBuffer<F>,
}

/// Pool with `N` slots of `I` bytes and its free list stored inline
pub type InlinePool<const N: usize, const I: usize> =
    ObjectPool<[[u8; I]; N], [[u8; HANDLE_SIZE]; N]>;

impl<S: Storage, F: Storage> ObjectPool<S, F> {
    /// Bind a pool to slot storage and free-list storage, then mark every
    /// slot free
    pub fn init(total_cnt: usize, item_size: usize, slots: S, free_list: F) -> Result<Self> {
        PoolConfig::items(total_cnt, item_size).check_storage(slots.byte_len())?;
        let mut free = DataRingBuffer::init(total_cnt, HANDLE_SIZE, free_list)?;

        for index in 0..total_cnt as u32 {
            let queued = free.put(&index.to_le_bytes());
            debug_assert!(queued);
        }
        tracing::debug!(total_cnt, item_size, "slot pool initialized");

        Ok(Self {
            slots,
            item_size,
            free,
        })
    }

    /// Acquire a free slot
    ///
    /// Returns `None` when every slot is already handed out.
    #[inline]
    pub fn dequeue(&mut self) -> Option<SlotHandle> {
        let mut raw = [0u8; HANDLE_SIZE];
        if !self.free.get(Some(&mut raw[..])) {
            tracing::trace!(total_cnt = self.total_cnt(), "slot pool exhausted");
            return None;
        }
        Some(SlotHandle {
            index: u32::from_le_bytes(raw),
        })
    }

    /// Release a slot back to the free set
    ///
    /// # Panics
    /// Panics if `handle` was not issued by a pool of at least this size.
    #[inline]
    pub fn enqueue(&mut self, handle: SlotHandle) {
        assert!(
            handle.index() < self.total_cnt(),
            "slot handle does not belong to this pool"
        );
        let released = self.free.put(&handle.index.to_le_bytes());
        debug_assert!(released, "more slots released than acquired");
    }

    /// Contents of a held slot
    #[inline]
    pub fn slot(&self, handle: &SlotHandle) -> &[u8] {
        let start = handle.index() * self.item_size;
        &self.slots.as_bytes()[start..start + self.item_size]
    }

    /// Writable contents of a held slot
    #[inline]
    pub fn slot_mut(&mut self, handle: &mut SlotHandle) -> &mut [u8] {
        let start = handle.index() * self.item_size;
        &mut self.slots.as_bytes_mut()[start..start + self.item_size]
    }

    /// Number of slots
    #[inline(always)]
    pub fn total_cnt(&self) -> usize {
        self.free.total_size()
    }

    /// Width of one slot in bytes
    #[inline(always)]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Free slots
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.free.size()
    }

    /// Slots currently handed out
    #[inline(always)]
    pub fn reserve_size(&self) -> usize {
        self.free.reserve_size()
    }

    /// No slot left to acquire
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Every slot is free
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.free.is_full()
    }
}

impl ObjectPool<Box<[u8]>, Box<[u8]>> {
    /// Pool with freshly allocated slot and free-list storage
    pub fn with_capacity(total_cnt: usize, item_size: usize) -> Result<Self> {
        let config = PoolConfig::items(total_cnt, item_size);
        config.validate()?;
        Self::init(
            total_cnt,
            item_size,
            storage::boxed(config.storage_len()?),
            storage::boxed(total_cnt * HANDLE_SIZE),
        )
    }
}

impl ObjectPool<MappedRegion, Box<[u8]>> {
    /// Pool whose slots live in an anonymous page-aligned mapping
    pub fn mapped(total_cnt: usize, item_size: usize) -> Result<Self> {
        let config = PoolConfig::items(total_cnt, item_size);
        config.validate()?;
        Self::init(
            total_cnt,
            item_size,
            MappedRegion::anon(config.storage_len()?)?,
            storage::boxed(total_cnt * HANDLE_SIZE),
        )
    }
}

impl<const N: usize, const I: usize> ObjectPool<[[u8; I]; N], [[u8; HANDLE_SIZE]; N]> {
    /// Pool with `N` slots of `I` bytes stored inline
    ///
    /// # Panics
    /// Panics if `N` or `I` is zero or `N` exceeds the index range.
    pub fn new_inline() -> Self {
        match Self::init(N, I, [[0u8; I]; N], [[0u8; HANDLE_SIZE]; N]) {
            Ok(pool) => pool,
            Err(err) => panic!("invalid inline pool layout: {err}"),
        }
    }
}

impl<S: Storage, F: Storage> std::fmt::Debug for ObjectPool<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectPool")
            .field("item_size", &self.item_size)
            .field("free", &self.free)
            .finish_non_exhaustive()
    }
}
