//! Fixed-item-size ring buffer with zero-copy enqueue/dequeue
//!
//! Items are atomic: `put` and `get` move exactly one whole item or nothing.
//!
//! Besides the copying calls, the ring offers a two-phase protocol that
//! works directly on the storage:
//! - `enqueue_get` hands out a [`Reservation`] over the next free slot. The
//!   caller fills it in place and publishes it with [`Reservation::enqueue`].
//! - `dequeue_peek` exposes the oldest item in place, `dequeue` releases it.
//!
//! A reservation borrows the ring mutably, so only one can be outstanding and
//! it cannot be touched after it is committed.

use std::ops::{Deref, DerefMut, Range};

use super::ring_state::{RingState, MAX_CAPACITY};
use super::storage::{self, Storage};
use crate::config::RingConfig;
use crate::error::Result;

/// Fixed-capacity ring of `item_size`-byte items
pub struct DataRingBuffer<S: Storage = Box<[u8]>> {
    state: RingState,
    item_size: usize,
    buffer: S,
}

/// Data ring with `N` inline items of `I` bytes each
pub type InlineDataRingBuffer<const N: usize, const I: usize> = DataRingBuffer<[[u8; I]; N]>;

impl<S: Storage> DataRingBuffer<S> {
    /// Bind a ring of `capacity` items, `item_size` bytes each, to `storage`
    pub fn init(capacity: usize, item_size: usize, storage: S) -> Result<Self> {
        RingConfig::items(capacity, item_size).check_storage(storage.byte_len())?;
        tracing::debug!(capacity, item_size, "data ring initialized");

        Ok(Self {
            state: RingState::new(capacity as u32),
            item_size,
            buffer: storage,
        })
    }

    #[inline(always)]
    fn slot(&self, ptr: usize) -> Range<usize> {
        let start = ptr * self.item_size;
        start..start + self.item_size
    }

    /// Copy one item into the ring
    ///
    /// Returns `false` without writing anything when the ring is full.
    ///
    /// # Panics
    /// Panics if `item.len() != item_size()`.
    #[inline]
    pub fn put(&mut self, item: &[u8]) -> bool {
        assert_eq!(item.len(), self.item_size, "item size mismatch");
        if self.state.reserve_size() == 0 {
            return false;
        }

        let range = self.slot(self.state.write_offset());
        self.buffer.as_bytes_mut()[range].copy_from_slice(item);
        self.state.produce(1);
        true
    }

    /// Remove the oldest item, copying it into `out` when given
    ///
    /// `None` discards the item. Returns `false` and leaves `out` untouched
    /// when the ring is empty.
    ///
    /// # Panics
    /// Panics if `out` is given and `out.len() != item_size()`.
    #[inline]
    pub fn get(&mut self, out: Option<&mut [u8]>) -> bool {
        if self.state.size() == 0 {
            return false;
        }

        if let Some(out) = out {
            assert_eq!(out.len(), self.item_size, "item size mismatch");
            let range = self.slot(self.state.read_offset());
            out.copy_from_slice(&self.buffer.as_bytes()[range]);
        }

        self.state.consume(1);
        true
    }

    /// Reserve the next free slot for in-place filling
    ///
    /// Returns `None` when the ring is full. Nothing is published until
    /// [`Reservation::enqueue`] is called; dropping the reservation abandons it.
    #[inline]
    pub fn enqueue_get(&mut self) -> Option<Reservation<'_, S>> {
        if self.state.reserve_size() == 0 {
            return None;
        }

        let range = self.slot(self.state.write_offset());
        let write_index = self.state.advance(self.state.write_index(), 1);

        Some(Reservation {
            ring: self,
            range,
            write_index,
            committed: false,
        })
    }

    /// Oldest item, in place, without removing it
    #[inline]
    pub fn dequeue_peek(&self) -> Option<&[u8]> {
        if self.state.size() == 0 {
            return None;
        }
        let range = self.slot(self.state.read_offset());
        Some(&self.buffer.as_bytes()[range])
    }

    /// Mutable view of the oldest item, without removing it
    #[inline]
    pub fn dequeue_peek_mut(&mut self) -> Option<&mut [u8]> {
        if self.state.size() == 0 {
            return None;
        }
        let range = self.slot(self.state.read_offset());
        Some(&mut self.buffer.as_bytes_mut()[range])
    }

    /// Release the oldest item, completing a `dequeue_peek`
    ///
    /// Same as `get(None)`.
    #[inline]
    pub fn dequeue(&mut self) -> bool {
        self.get(None)
    }

    /// Forget all queued items
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Capacity in items
    #[inline(always)]
    pub fn total_size(&self) -> usize {
        self.state.total_size()
    }

    /// Width of one item in bytes
    #[inline(always)]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Queued items
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.state.size()
    }

    /// Free items
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

    pub fn state(&self) -> &RingState {
        &self.state
    }
}

impl DataRingBuffer<Box<[u8]>> {
    /// Ring with freshly allocated storage for `capacity` items
    pub fn with_capacity(capacity: usize, item_size: usize) -> Result<Self> {
        let config = RingConfig::items(capacity, item_size);
        config.validate()?;
        Self::init(capacity, item_size, storage::boxed(config.storage_len()?))
    }
}

impl<const N: usize, const I: usize> DataRingBuffer<[[u8; I]; N]> {
    const CAPACITY: u32 = {
        assert!(N > 0, "DataRingBuffer capacity must be > 0");
        assert!(I > 0, "DataRingBuffer item size must be > 0");
        assert!(
            N <= MAX_CAPACITY,
            "DataRingBuffer capacity must leave headroom for doubled indices"
        );
        N as u32
    };

    /// Ring with `N` items of `I` bytes stored inline
    pub const fn new_inline() -> Self {
        Self {
            state: RingState::new(Self::CAPACITY),
            item_size: I,
            buffer: [[0u8; I]; N],
        }
    }
}

impl<const N: usize, const I: usize> Default for DataRingBuffer<[[u8; I]; N]> {
    fn default() -> Self {
        Self::new_inline()
    }
}

impl<S: Storage> std::fmt::Debug for DataRingBuffer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataRingBuffer")
            .field("state", &self.state)
            .field("item_size", &self.item_size)
            .finish_non_exhaustive()
    }
}

/// A reserved, not yet published slot in a [`DataRingBuffer`]
///
/// Derefs to the slot bytes. Holds the write index the ring will advance to
/// once the slot is committed.
pub struct Reservation<'a, S: Storage> {
    ring: &'a mut DataRingBuffer<S>,
    range: Range<usize>,
    write_index: u32,
    committed: bool,
}

impl<S: Storage> Reservation<'_, S> {
    /// Write index that `enqueue` will publish
    #[inline(always)]
    pub fn write_index(&self) -> u32 {
        self.write_index
    }

    /// Publish the slot: the item becomes visible to readers
    #[inline]
    pub fn enqueue(mut self) {
        self.ring.state.commit_write(self.write_index);
        self.committed = true;
    }
}

impl<S: Storage> Deref for Reservation<'_, S> {
    type Target = [u8];

    #[inline(always)]
    fn deref(&self) -> &[u8] {
        &self.ring.buffer.as_bytes()[self.range.clone()]
    }
}

impl<S: Storage> DerefMut for Reservation<'_, S> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.ring.buffer.as_bytes_mut()[self.range.clone()]
    }
}

impl<S: Storage> Drop for Reservation<'_, S> {
    fn drop(&mut self) {
        if !self.committed {
            tracing::trace!(
                write_index = self.write_index,
                "reservation dropped without enqueue"
            );
        }
    }
}
