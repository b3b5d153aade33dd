//! Error types for buffer construction
//!
//! Only initialization can fail with an error. Runtime operations report
//! exhaustion, underflow and truncation through their return values.

/// Result type alias for buffer construction
pub type Result<T> = std::result::Result<T, RingError>;

/// Reasons a ring buffer or pool could not be initialized
#[derive(Debug, thiserror::Error)]
pub enum RingError {
    /// Capacity of zero items
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Capacity does not leave headroom for the doubled index range
    #[error("capacity {requested} exceeds the maximum of {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    /// Item size of zero bytes
    #[error("item size must be greater than zero")]
    ZeroItemSize,

    /// Backing storage shorter than `capacity * item_size`
    #[error("storage too small: required {required} bytes, got {actual}")]
    StorageTooSmall { required: usize, actual: usize },

    /// `capacity * item_size` does not fit in `usize`
    #[error("storage size overflows usize")]
    SizeOverflow,

    /// Anonymous mapping for backing storage failed
    #[error("failed to map storage: {0}")]
    Map(#[from] std::io::Error),
}

impl RingError {
    /// Storage too small for the requested layout
    pub fn storage_too_small(required: usize, actual: usize) -> Self {
        Self::StorageTooSmall { required, actual }
    }
}
