//! Core module: fixed-capacity rings and the slot pool built on them
//!
//! Design principles:
//! - Doubled indices: cursors run over `[0, 2 * capacity)`, so full and
//!   empty are told apart without a wasted slot
//! - No-Allocation: storage is bound once at init, never resized
//! - Single owner: no atomics, no locks; share behind an external guard

mod data_ring_buffer;
mod mapped_region;
mod pool;
mod ring_buffer;
mod ring_state;
mod storage;

pub use data_ring_buffer::{DataRingBuffer, InlineDataRingBuffer, Reservation};
pub use mapped_region::MappedRegion;
pub use pool::{InlinePool, ObjectPool, SlotHandle, HANDLE_SIZE};
pub use ring_buffer::{InlineRingBuffer, RingBuffer};
pub use ring_state::{RingState, MAX_CAPACITY};
pub use storage::Storage;
