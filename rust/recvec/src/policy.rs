//! Capacity policy and overflow-checked size arithmetic.
//!
//! Every capacity the container ever allocates is computed here, so the
//! `capacity * element_size <= MAX_ALLOCATION_BYTES` invariant only has to be
//! enforced in one place.

use std::alloc::Layout;

use recvec_common::{Error, Result};

/// Smallest backing allocation, in bytes. Tiny vectors are rounded up to this.
pub const MIN_ALLOCATION_BYTES: usize = 64;

/// Below this many allocated bytes the capacity doubles on growth, above it
/// the capacity grows by half.
pub const GROWTH_THRESHOLD_BYTES: usize = 4096;

/// Alignment of the backing buffer.
pub const BUFFER_ALIGNMENT: usize = 16;

/// Largest backing allocation, in bytes, that can be described by a [`Layout`]
/// with [`BUFFER_ALIGNMENT`].
pub const MAX_ALLOCATION_BYTES: usize = isize::MAX as usize & !(BUFFER_ALIGNMENT - 1);

/// Returns the size in bytes of `count` records of `element_size` bytes each.
///
/// # Errors
///
/// Returns an overflow error (tagged with `context`) if the product does not fit
/// into `usize` or exceeds [`MAX_ALLOCATION_BYTES`].
#[inline]
pub fn byte_size(count: usize, element_size: usize, context: &str) -> Result<usize> {
    count
        .checked_mul(element_size)
        .filter(|&size| size <= MAX_ALLOCATION_BYTES)
        .ok_or_else(|| overflow(context, count, element_size))
}

/// Returns `true` if `count` records of `element_size` bytes can be allocated
/// without exceeding [`MAX_ALLOCATION_BYTES`].
#[inline]
pub fn fits(count: usize, element_size: usize) -> bool {
    count
        .checked_mul(element_size)
        .is_some_and(|size| size <= MAX_ALLOCATION_BYTES)
}

/// Minimum capacity (in records) for the given element size: at least one
/// record and at least [`MIN_ALLOCATION_BYTES`] of storage.
#[inline]
pub fn min_capacity(element_size: usize) -> usize {
    debug_assert_ne!(element_size, 0);
    MIN_ALLOCATION_BYTES.div_ceil(element_size).max(1)
}

/// Computes the capacity to grow to when `requested` records no longer fit
/// into `capacity`.
///
/// The candidate is `2 * capacity + 1` while the current allocation is smaller
/// than [`GROWTH_THRESHOLD_BYTES`], and `capacity + capacity / 2 + 1` above it.
/// The result is the larger of the candidate and `requested`, falling back to
/// exactly `requested` when the candidate would exceed the size limit.
///
/// # Errors
///
/// Returns an overflow error if `requested` records cannot be allocated at all.
pub fn grown_capacity(capacity: usize, element_size: usize, requested: usize) -> Result<usize> {
    byte_size(requested, element_size, "requested capacity")?;
    if requested <= capacity {
        return Ok(capacity);
    }

    // Compares bytes, not `capacity < GROWTH_THRESHOLD_BYTES / element_size`.
    // The two differ when `element_size` does not divide the threshold.
    let candidate = if capacity.saturating_mul(element_size) < GROWTH_THRESHOLD_BYTES {
        capacity.checked_mul(2).and_then(|c| c.checked_add(1))
    } else {
        capacity
            .checked_add(capacity / 2)
            .and_then(|c| c.checked_add(1))
    };

    Ok(match candidate {
        Some(candidate) if fits(candidate, element_size) => candidate.max(requested),
        _ => requested,
    })
}

/// Builds the layout of a backing buffer of `size` bytes.
#[inline]
pub fn buffer_layout(size: usize) -> Result<Layout> {
    Layout::from_size_align(size, BUFFER_ALIGNMENT)
        .map_err(|e| Error::overflow(format!("buffer layout of {size} bytes: {e}")))
}

#[cold]
fn overflow(context: &str, count: usize, element_size: usize) -> Error {
    Error::overflow(format!("{context}: {count} x {element_size} bytes"))
}

#[cfg(test)]
mod tests {
    use recvec_common::Status;

    use super::*;

    #[test]
    fn test_byte_size() {
        assert_eq!(byte_size(0, 4, "t").unwrap(), 0);
        assert_eq!(byte_size(25, 4, "t").unwrap(), 100);
        assert_eq!(
            byte_size(usize::MAX, 1, "t").unwrap_err().status(),
            Status::RangeOrOverflow
        );
        assert_eq!(
            byte_size(usize::MAX / 2, 4, "t").unwrap_err().status(),
            Status::RangeOrOverflow
        );
        assert_eq!(
            byte_size(MAX_ALLOCATION_BYTES, 1, "t").unwrap(),
            MAX_ALLOCATION_BYTES
        );
        assert!(byte_size(MAX_ALLOCATION_BYTES + 1, 1, "t").is_err());
    }

    #[test]
    fn test_min_capacity() {
        assert_eq!(min_capacity(1), 64);
        assert_eq!(min_capacity(3), 22);
        assert_eq!(min_capacity(4), 16);
        assert_eq!(min_capacity(64), 1);
        assert_eq!(min_capacity(100), 1);
        assert_eq!(min_capacity(usize::MAX), 1);
    }

    #[test]
    fn test_grown_capacity_doubles_small() {
        // 25 * 4 = 100 bytes, below the threshold
        assert_eq!(grown_capacity(25, 4, 26).unwrap(), 51);
        // requested beyond the candidate wins
        assert_eq!(grown_capacity(25, 4, 80).unwrap(), 80);
        // nothing to do
        assert_eq!(grown_capacity(25, 4, 25).unwrap(), 25);
    }

    #[test]
    fn test_grown_capacity_half_large() {
        // 1024 * 4 = 4096 bytes, at the threshold
        assert_eq!(grown_capacity(1024, 4, 1025).unwrap(), 1024 + 512 + 1);
        assert_eq!(grown_capacity(4096, 1, 4097).unwrap(), 4096 + 2048 + 1);
        assert_eq!(grown_capacity(4095, 1, 4096).unwrap(), 8191);
    }

    #[test]
    fn test_grown_capacity_threshold_in_bytes() {
        // 1365 * 3 = 4095 bytes, still below the threshold
        assert_eq!(grown_capacity(1365, 3, 1366).unwrap(), 2 * 1365 + 1);
        // 1366 * 3 = 4098 bytes
        assert_eq!(grown_capacity(1366, 3, 1367).unwrap(), 1366 + 683 + 1);
    }

    #[test]
    fn test_grown_capacity_clamps_to_requested() {
        let element_size = 1 << 20;
        let max_records = MAX_ALLOCATION_BYTES / element_size;
        let capacity = max_records - 10;
        assert_eq!(
            grown_capacity(capacity, element_size, capacity + 1).unwrap(),
            capacity + 1
        );
        assert_eq!(
            grown_capacity(capacity, element_size, max_records).unwrap(),
            max_records
        );
    }

    #[test]
    fn test_grown_capacity_overflow() {
        let err = grown_capacity(16, 4, usize::MAX).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
    }

    #[test]
    fn test_buffer_layout() {
        let layout = buffer_layout(100).unwrap();
        assert_eq!(layout.size(), 100);
        assert_eq!(layout.align(), BUFFER_ALIGNMENT);
        assert!(buffer_layout(MAX_ALLOCATION_BYTES).is_ok());
    }
}
