//! Backing storage for rings and pools
//!
//! A ring owns its storage exclusively for its whole lifetime. Anything that
//! can hand out one contiguous byte slice qualifies: inline arrays for
//! statically sized buffers, boxed slices allocated once at init, a borrowed
//! caller region, or a [`MappedRegion`](super::MappedRegion).

/// A contiguous byte region a ring can own
pub trait Storage {
    fn as_bytes(&self) -> &[u8];

    fn as_bytes_mut(&mut self) -> &mut [u8];

    #[inline(always)]
    fn byte_len(&self) -> usize {
        self.as_bytes().len()
    }
}

impl<const N: usize> Storage for [u8; N] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

// Item-shaped inline storage, `N` items of `I` bytes
impl<const I: usize, const N: usize> Storage for [[u8; I]; N] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self.as_flattened()
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.as_flattened_mut()
    }
}

impl Storage for Box<[u8]> {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl Storage for Vec<u8> {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl Storage for &mut [u8] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Zeroed heap storage of `len` bytes, allocated once
pub(crate) fn boxed(len: usize) -> Box<[u8]> {
    vec![0u8; len].into_boxed_slice()
}
