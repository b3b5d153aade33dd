//! Shared index arithmetic for all ring variants
//!
//! Read and write indices run over `[0, 2 * total_size)` instead of
//! `[0, total_size)`. Folding once into a physical offset leaves one extra bit
//! that tells "empty" (indices equal) apart from "full" (indices differ by
//! exactly `total_size`), so no slot is sacrificed.

/// Largest capacity whose doubled index range still fits in `u32`
pub const MAX_CAPACITY: usize = (u32::MAX / 2) as usize;

/// Capacity and cursors of a ring, independent of item width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingState {
    total_size: u32,
    read_index: u32,
    write_index: u32,
}

impl RingState {
    /// Fresh, empty state. `total_size` must be in `1..=MAX_CAPACITY`.
    pub(crate) const fn new(total_size: u32) -> Self {
        debug_assert!(total_size > 0 && total_size as usize <= MAX_CAPACITY);
        Self {
            total_size,
            read_index: 0,
            write_index: 0,
        }
    }

    #[inline(always)]
    pub const fn total_size(&self) -> usize {
        self.total_size as usize
    }

    #[inline(always)]
    pub const fn read_index(&self) -> u32 {
        self.read_index
    }

    #[inline(always)]
    pub const fn write_index(&self) -> u32 {
        self.write_index
    }

    /// Number of occupied items
    #[inline(always)]
    pub const fn size(&self) -> usize {
        let size = if self.write_index >= self.read_index {
            self.write_index - self.read_index
        } else {
            (self.total_size << 1) - self.read_index + self.write_index
        };
        size as usize
    }

    /// Number of free items
    #[inline(always)]
    pub const fn reserve_size(&self) -> usize {
        self.total_size() - self.size()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.read_index == self.write_index
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.size() == self.total_size()
    }

    /// Fold a logical index into `[0, total_size)`
    #[inline(always)]
    pub const fn physical(&self, index: u32) -> usize {
        let ptr = if index >= self.total_size {
            index - self.total_size
        } else {
            index
        };
        ptr as usize
    }

    /// Logical index `n` items past `index`, wrapped at `2 * total_size`.
    /// `n` must not exceed `total_size`.
    #[inline(always)]
    pub const fn advance(&self, index: u32, n: u32) -> u32 {
        // index + n can exceed u32 near MAX_CAPACITY, so compare against the gap
        let gap = (self.total_size << 1) - index;
        if n >= gap {
            n - gap
        } else {
            index + n
        }
    }

    /// Physical offset of the next write
    #[inline(always)]
    pub const fn write_offset(&self) -> usize {
        self.physical(self.write_index)
    }

    /// Physical offset of the next read
    #[inline(always)]
    pub const fn read_offset(&self) -> usize {
        self.physical(self.read_index)
    }

    #[inline(always)]
    pub(crate) fn commit_write(&mut self, write_index: u32) {
        debug_assert!(write_index < self.total_size << 1);
        self.write_index = write_index;
    }

    #[inline(always)]
    pub(crate) fn produce(&mut self, n: u32) {
        self.write_index = self.advance(self.write_index, n);
    }

    #[inline(always)]
    pub(crate) fn consume(&mut self, n: u32) {
        self.read_index = self.advance(self.read_index, n);
    }

    pub(crate) fn clear(&mut self) {
        self.read_index = 0;
        self.write_index = 0;
    }
}
