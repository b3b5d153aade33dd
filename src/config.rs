//! Buffer layout configuration
//!
//! Every constructor funnels its `(capacity, item_size)` pair through
//! [`RingConfig::validate`] so the index-width limit lives in one place.

use crate::core::MAX_CAPACITY;
use crate::error::{Result, RingError};

/// Layout of a ring buffer or pool: how many items, and how wide each one is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Number of items (bytes for the byte ring, slots for the pool)
    pub capacity: usize,
    /// Width of one item in bytes
    pub item_size: usize,
}

/// Pool layout: `capacity` is the slot count, `item_size` the slot width
pub type PoolConfig = RingConfig;

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            item_size: 1,
        }
    }
}

impl RingConfig {
    /// Byte ring layout with `capacity` bytes
    pub const fn bytes(capacity: usize) -> Self {
        Self {
            capacity,
            item_size: 1,
        }
    }

    /// Fixed-size item layout
    pub const fn items(capacity: usize, item_size: usize) -> Self {
        Self {
            capacity,
            item_size,
        }
    }

    /// Set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set item size
    pub fn with_item_size(mut self, item_size: usize) -> Self {
        self.item_size = item_size;
        self
    }

    /// Check the layout against the index width
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(RingError::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        if self.item_size == 0 {
            return Err(RingError::ZeroItemSize);
        }
        self.storage_len().map(|_| ())
    }

    /// Bytes of backing storage this layout needs
    pub fn storage_len(&self) -> Result<usize> {
        self.capacity
            .checked_mul(self.item_size)
            .ok_or(RingError::SizeOverflow)
    }

    /// Validate and check that `actual` bytes are enough to back this layout
    pub(crate) fn check_storage(&self, actual: usize) -> Result<usize> {
        self.validate()?;
        let required = self.storage_len()?;
        if actual < required {
            return Err(RingError::storage_too_small(required, actual));
        }
        Ok(required)
    }
}
