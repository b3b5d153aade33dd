//! Simple Ringbuffer - fixed-capacity buffers for constrained targets
//!
//! Architecture:
//! - [`RingBuffer`]: byte ring with partial, truncating reads and writes
//! - [`DataRingBuffer`]: ring of fixed-size items with zero-copy
//!   reserve/commit enqueue and peek/release dequeue
//! - [`ObjectPool`]: slot pool whose free list is a data ring of slot indices
//!
//! All three share [`RingState`]: read and write cursors over
//! `[0, 2 * capacity)`, folded once into a physical offset.
//!
//! Runtime operations never fail with an error. Exhaustion and underflow are
//! reported as `0`, `false` or `None`; partial transfers return their count.
//! Only construction returns [`Result`](error::Result).

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::{PoolConfig, RingConfig};
pub use crate::core::{
    DataRingBuffer, InlineDataRingBuffer, InlinePool, InlineRingBuffer, MappedRegion, ObjectPool,
    Reservation, RingBuffer, RingState, SlotHandle, Storage, HANDLE_SIZE, MAX_CAPACITY,
};
pub use crate::error::{Result, RingError};
