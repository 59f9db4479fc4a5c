use std::{alloc::Layout, ptr, ptr::NonNull};

use recvec_common::{Error, Result, verify_arg, verify_range};

use crate::{
    alloc::{Global, RawAllocator},
    policy,
};

/// A growable, contiguous vector of fixed-size opaque records.
///
/// Every record is `element_size` bytes wide; the width is chosen at creation and
/// never changes. The vector never interprets record contents: records are copied
/// in and out as raw bytes.
///
/// All mutating operations are all-or-nothing: when one returns an error, the
/// length, capacity and contents of the vector are exactly what they were before
/// the call.
///
/// # Layout and invariants
///
/// - the backing buffer is a single allocation of `capacity * element_size` bytes,
///   aligned to [`policy::BUFFER_ALIGNMENT`];
/// - `len <= capacity`, and `capacity >= 1` at all times;
/// - `capacity * element_size` never exceeds [`policy::MAX_ALLOCATION_BYTES`];
/// - only the first `len` records are logically part of the vector.
///
/// Every byte of the buffer is initialized: fresh allocations and grown regions
/// are zero-filled, and removed records keep their old bytes. Records exposed by
/// [`resize`](Self::resize) or inserted without a source therefore have
/// unspecified (but never undefined) content.
pub struct RecordVec<A: RawAllocator = Global> {
    /// Start of the backing buffer.
    ptr: NonNull<u8>,
    /// Size of each record in bytes.
    element_size: usize,
    /// Number of records in use.
    len: usize,
    /// Number of records the buffer can hold.
    capacity: usize,
    alloc: A,
}

unsafe impl<A: RawAllocator + Send> Send for RecordVec<A> {}
unsafe impl<A: RawAllocator + Sync> Sync for RecordVec<A> {}

impl RecordVec<Global> {
    /// Creates a new vector of `element_size`-byte records with room for at least
    /// `capacity_hint` records.
    ///
    /// The initial capacity is `max(capacity_hint, ceil(64 / element_size), 1)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `element_size` is zero;
    /// - `Overflow` if the initial allocation size is not representable;
    /// - `AllocationFailure` if the allocator cannot provide the buffer.
    pub fn new(element_size: usize, capacity_hint: usize) -> Result<RecordVec> {
        Self::new_in(element_size, capacity_hint, Global)
    }
}

impl<A: RawAllocator> RecordVec<A> {
    /// Creates a new vector backed by the given allocator.
    ///
    /// See [`RecordVec::new`] for the capacity rules and errors.
    pub fn new_in(element_size: usize, capacity_hint: usize, alloc: A) -> Result<RecordVec<A>> {
        verify_arg!(element_size, element_size > 0);

        let capacity = capacity_hint.max(policy::min_capacity(element_size));
        let size = policy::byte_size(capacity, element_size, "initial capacity")?;
        let layout = policy::buffer_layout(size)?;
        let ptr = match alloc.allocate_zeroed(layout) {
            Some(ptr) => ptr,
            None => {
                log::warn!("record vector: failed to allocate {size} bytes");
                return Err(Error::allocation_failure(size));
            }
        };

        log::debug!(
            "record vector created: element_size={element_size}, capacity={capacity}, bytes={size}"
        );
        Ok(RecordVec {
            ptr,
            element_size,
            len: 0,
            capacity,
            alloc,
        })
    }

    /// Returns the number of records in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of records the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the size of each record in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the total size of the backing allocation in bytes.
    #[inline]
    pub fn heap_size(&self) -> usize {
        self.capacity * self.element_size
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the bytes of record `index`, or `None` if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        if index < self.len {
            let start = index * self.element_size;
            Some(&self.as_bytes()[start..start + self.element_size])
        } else {
            None
        }
    }

    /// Returns the mutable bytes of record `index`, or `None` if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index < self.len {
            let start = index * self.element_size;
            let element_size = self.element_size;
            Some(&mut self.as_bytes_mut()[start..start + element_size])
        } else {
            None
        }
    }

    /// Returns the first record, or `None` if the vector is empty.
    #[inline]
    pub fn front(&self) -> Option<&[u8]> {
        self.at(0)
    }

    /// Returns the last record, or `None` if the vector is empty.
    #[inline]
    pub fn back(&self) -> Option<&[u8]> {
        self.len.checked_sub(1).and_then(|last| self.at(last))
    }

    /// Returns the bytes of all records, or `None` if the vector is empty.
    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_bytes())
        }
    }

    /// Returns the mutable bytes of all records, or `None` if the vector is empty.
    #[inline]
    pub fn data_mut(&mut self) -> Option<&mut [u8]> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_bytes_mut())
        }
    }

    /// Returns the bytes of all records (`len * element_size` bytes).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len * self.element_size) }
    }

    /// Returns the mutable bytes of all records (`len * element_size` bytes).
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe {
            std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len * self.element_size)
        }
    }

    /// Returns an iterator over the records, each yielded as an `element_size`-byte slice.
    pub fn records(&self) -> std::slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_size)
    }

    /// Ensures the vector can hold at least `capacity` records.
    ///
    /// Does nothing if the current capacity is already sufficient; otherwise
    /// reallocates to exactly `capacity` records.
    ///
    /// # Errors
    ///
    /// `Overflow` if the byte size is not representable, `AllocationFailure` if the
    /// allocator refuses. The vector is unchanged in both cases.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity {
            return Ok(());
        }
        self.reallocate(capacity, "reserve")
    }

    /// Shrinks the capacity to the current length, but not below one record and
    /// 64 bytes.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        let target = self.len.max(policy::min_capacity(self.element_size));
        if target >= self.capacity {
            return Ok(());
        }
        log::debug!(
            "record vector shrink: capacity {} -> {target}",
            self.capacity
        );
        self.reallocate(target, "shrink_to_fit")
    }

    /// Removes all records. The capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replaces the contents of the vector with `count` records.
    ///
    /// When `source` is `Some`, it must hold exactly `count * element_size` bytes,
    /// which are copied in. When it is `None`, the records have unspecified content.
    pub fn assign(&mut self, source: Option<&[u8]>, count: usize) -> Result<()> {
        self.replace(0, self.len, source, count)
    }

    /// Replaces the records in `[i, j)` with `count` records.
    ///
    /// This is the single general-purpose mutator: insertion, removal and
    /// assignment are all expressed through it. Records after `j` are shifted to
    /// follow the replacement.
    ///
    /// When `source` is `Some`, it must hold exactly `count * element_size` bytes,
    /// which are copied in. When it is `None`, the new records have unspecified
    /// content.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `i > j` or `j > len`;
    /// - `Overflow` if `count` or the resulting length is not representable;
    /// - `InvalidArgument` if `source` has the wrong length;
    /// - `AllocationFailure` if the vector needs to grow and the allocator refuses.
    ///
    /// The vector is unchanged on any error.
    pub fn replace(
        &mut self,
        i: usize,
        j: usize,
        source: Option<&[u8]>,
        count: usize,
    ) -> Result<()> {
        verify_range!(i, i <= j);
        verify_range!(j, j <= self.len);

        let count_bytes = policy::byte_size(count, self.element_size, "replacement count")?;
        if let Some(source) = source {
            verify_arg!(source, source.len() == count_bytes);
        }
        let new_len = (self.len - (j - i))
            .checked_add(count)
            .ok_or_else(|| Error::overflow("replace: resulting length"))?;

        self.grow(new_len)?;

        let element_size = self.element_size;
        let base = self.ptr.as_ptr();
        let tail_dst = i + count;
        if j < self.len && tail_dst != j {
            unsafe {
                ptr::copy(
                    base.add(j * element_size),
                    base.add(tail_dst * element_size),
                    (self.len - j) * element_size,
                );
            }
        }
        if let Some(source) = source {
            if count_bytes != 0 {
                unsafe {
                    ptr::copy_nonoverlapping(
                        source.as_ptr(),
                        base.add(i * element_size),
                        count_bytes,
                    );
                }
            }
        }

        self.len = new_len;
        Ok(())
    }

    /// Inserts `count` records before record `index`.
    ///
    /// `index` may equal `len`, in which case the records are appended.
    /// See [`replace`](Self::replace) for the source contract and errors.
    #[inline]
    pub fn insert(&mut self, index: usize, source: Option<&[u8]>, count: usize) -> Result<()> {
        self.replace(index, index, source, count)
    }

    /// Removes the records in `[i, j)`.
    #[inline]
    pub fn erase(&mut self, i: usize, j: usize) -> Result<()> {
        self.replace(i, j, None, 0)
    }

    /// Appends one record, copied from `source` if present.
    #[inline]
    pub fn push_back(&mut self, source: Option<&[u8]>) -> Result<()> {
        self.insert(self.len, source, 1)
    }

    /// Removes the last record.
    ///
    /// The bytes of the removed record stay in the buffer but are no longer
    /// reachable through the vector.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::out_of_range("pop_back", "vector is empty"));
        }
        self.len -= 1;
        Ok(())
    }

    /// Sets the number of records to `new_len`, growing the buffer if needed.
    ///
    /// Records exposed by growing the length have unspecified content.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        self.grow(new_len)?;
        self.len = new_len;
        Ok(())
    }

    /// Replaces the contents of `self` with a copy of the records in `src`.
    ///
    /// The capacity of `self` is independent of `src`: it only grows if the
    /// records do not fit.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the element sizes differ, otherwise the errors of
    /// [`assign`](Self::assign).
    pub fn copy_from<B: RawAllocator>(&mut self, src: &RecordVec<B>) -> Result<()> {
        verify_arg!(element_size, self.element_size == src.element_size);
        self.assign(Some(src.as_bytes()), src.len)
    }

    /// Exchanges the entire contents of two vectors (buffers, element sizes,
    /// lengths and capacities) without copying any records.
    #[inline]
    pub fn swap(&mut self, other: &mut RecordVec<A>) {
        std::mem::swap(self, other);
    }

    /// Creates an independent copy of the vector with the same element size and
    /// records, sized to the current length.
    pub fn try_clone(&self) -> Result<RecordVec<A>>
    where
        A: Clone,
    {
        let mut copy = RecordVec::new_in(self.element_size, self.len, self.alloc.clone())?;
        copy.copy_from(self)?;
        Ok(copy)
    }
}

impl<A: RawAllocator> RecordVec<A> {
    /// Grows the capacity so that at least `requested` records fit.
    fn grow(&mut self, requested: usize) -> Result<()> {
        if requested <= self.capacity {
            return Ok(());
        }
        let capacity = policy::grown_capacity(self.capacity, self.element_size, requested)?;
        self.reallocate(capacity, "grow")
    }

    /// Moves the records into a buffer of exactly `capacity` records.
    ///
    /// On failure the vector keeps its current buffer.
    #[cold]
    fn reallocate(&mut self, capacity: usize, context: &str) -> Result<()> {
        debug_assert!(capacity >= self.len);
        debug_assert!(capacity > 0);

        let old_size = self.heap_size();
        let new_size = policy::byte_size(capacity, self.element_size, context)?;
        policy::buffer_layout(new_size)?;

        let ptr = match unsafe {
            self.alloc
                .reallocate(self.ptr, self.current_layout(), new_size)
        } {
            Some(ptr) => ptr,
            None => {
                log::warn!("record vector {context}: failed to reallocate {old_size} -> {new_size} bytes");
                return Err(Error::allocation_failure(new_size));
            }
        };

        if new_size > old_size {
            unsafe {
                ptr.as_ptr().add(old_size).write_bytes(0, new_size - old_size);
            }
        }

        log::trace!(
            "record vector {context}: capacity {} -> {capacity} ({old_size} -> {new_size} bytes)",
            self.capacity
        );
        self.ptr = ptr;
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    fn current_layout(&self) -> Layout {
        // Checked when the capacity was set.
        unsafe { Layout::from_size_align_unchecked(self.heap_size(), policy::BUFFER_ALIGNMENT) }
    }
}

impl<A: RawAllocator> Drop for RecordVec<A> {
    fn drop(&mut self) {
        unsafe { self.alloc.deallocate(self.ptr, self.current_layout()) }
    }
}

impl<A: RawAllocator> std::fmt::Debug for RecordVec<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordVec")
            .field("values", &self.as_bytes())
            .field("len", &self.len)
            .field("cap", &self.capacity)
            .field("element_size", &self.element_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use recvec_common::Status;

    use super::*;

    fn ints(values: &[i32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    fn read_ints(v: &RecordVec<impl RawAllocator>) -> Vec<i32> {
        v.records()
            .map(|r| i32::from_ne_bytes(r.try_into().unwrap()))
            .collect()
    }

    /// Delegates to the global allocator until `budget` reallocations have been
    /// served, then refuses every request.
    struct BudgetAllocator {
        budget: Cell<usize>,
    }

    impl BudgetAllocator {
        fn new(budget: usize) -> BudgetAllocator {
            BudgetAllocator {
                budget: Cell::new(budget),
            }
        }

        fn take(&self) -> bool {
            match self.budget.get() {
                0 => false,
                n => {
                    self.budget.set(n - 1);
                    true
                }
            }
        }
    }

    unsafe impl RawAllocator for BudgetAllocator {
        fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
            if self.take() {
                Global.allocate_zeroed(layout)
            } else {
                None
            }
        }

        unsafe fn reallocate(
            &self,
            ptr: NonNull<u8>,
            old_layout: Layout,
            new_size: usize,
        ) -> Option<NonNull<u8>> {
            if self.take() {
                unsafe { Global.reallocate(ptr, old_layout, new_size) }
            } else {
                None
            }
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { Global.deallocate(ptr, layout) }
        }
    }

    #[test]
    fn test_new_capacity_rules() {
        let v = RecordVec::new(4, 25).unwrap();
        assert_eq!(v.capacity(), 25);
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.element_size(), 4);

        let v = RecordVec::new(1, 0).unwrap();
        assert_eq!(v.capacity(), 64);

        let v = RecordVec::new(3, 1).unwrap();
        assert_eq!(v.capacity(), 22);

        let v = RecordVec::new(1000, 0).unwrap();
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_new_rejects_bad_arguments() {
        let err = RecordVec::new(0, 1).unwrap_err();
        assert_eq!(err.status(), Status::InvalidArgument);

        let err = RecordVec::new(usize::MAX, 0).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);

        let err = RecordVec::new(1, usize::MAX).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
    }

    #[test]
    fn test_new_allocation_failure() {
        let alloc = BudgetAllocator::new(0);
        let err = RecordVec::new_in(4, 25, &alloc).unwrap_err();
        assert_eq!(err.status(), Status::AllocationFailure);
    }

    #[test]
    fn test_accessors() {
        let mut v = RecordVec::new(4, 25).unwrap();
        assert!(v.at(0).is_none());
        assert!(v.front().is_none());
        assert!(v.back().is_none());
        assert!(v.data().is_none());

        v.assign(Some(&ints(&[0, 1, 2, 3, 4])), 5).unwrap();
        assert_eq!(v.at(1).unwrap(), &1i32.to_ne_bytes());
        assert!(v.at(5).is_none());
        assert_eq!(v.front().unwrap(), &0i32.to_ne_bytes());
        assert_eq!(v.back().unwrap(), &4i32.to_ne_bytes());
        assert_eq!(v.data().unwrap().len(), 20);

        v.at_mut(2).unwrap().copy_from_slice(&42i32.to_ne_bytes());
        assert_eq!(read_ints(&v), [0, 1, 42, 3, 4]);
    }

    #[test]
    fn test_replace_shifts_tail() {
        let mut v = RecordVec::new(4, 25).unwrap();
        v.assign(Some(&ints(&[0, 1, -1, -1, -1, 4])), 6).unwrap();
        v.replace(2, 5, Some(&ints(&[2, 3])), 2).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(read_ints(&v), [0, 1, 2, 3, 4]);

        v.replace(1, 2, Some(&ints(&[7, 8, 9])), 3).unwrap();
        assert_eq!(read_ints(&v), [0, 7, 8, 9, 2, 3, 4]);
    }

    #[test]
    fn test_replace_range_errors_leave_vector_unchanged() {
        let mut v = RecordVec::new(4, 25).unwrap();
        v.assign(Some(&ints(&[0, 1, 2, 3, 4])), 5).unwrap();

        let err = v.replace(3, 2, None, 1).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
        let err = v.replace(2, 6, None, 0).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
        let err = v.replace(0, 0, None, usize::MAX).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);

        assert_eq!(v.capacity(), 25);
        assert_eq!(read_ints(&v), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_replace_source_length_mismatch() {
        let mut v = RecordVec::new(4, 25).unwrap();
        let err = v.insert(0, Some(&[1u8, 2, 3][..]), 1).unwrap_err();
        assert_eq!(err.status(), Status::InvalidArgument);
        assert!(v.is_empty());
    }

    #[test]
    fn test_insert_and_erase() {
        let mut v = RecordVec::new(4, 25).unwrap();
        v.insert(0, Some(&ints(&[2, 3, 4])), 3).unwrap();
        v.insert(0, Some(&ints(&[0, 1])), 2).unwrap();
        assert_eq!(read_ints(&v), [0, 1, 2, 3, 4]);

        v.erase(1, 3).unwrap();
        assert_eq!(read_ints(&v), [0, 3, 4]);
        v.erase(0, 3).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 25);
    }

    #[test]
    fn test_push_pop() {
        let mut v = RecordVec::new(4, 25).unwrap();
        for i in 0..30i32 {
            v.push_back(Some(&i.to_ne_bytes())).unwrap();
            assert_eq!(v.len(), i as usize + 1);
        }
        assert!(v.capacity() >= 30);
        assert_eq!(read_ints(&v), (0..30).collect::<Vec<_>>());

        v.pop_back().unwrap();
        assert_eq!(v.len(), 29);
        v.clear();
        let err = v.pop_back().unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn test_pop_back_keeps_bytes() {
        let mut v = RecordVec::new(4, 25).unwrap();
        v.assign(Some(&ints(&[5, 6])), 2).unwrap();
        v.pop_back().unwrap();
        v.resize(2).unwrap();
        assert_eq!(read_ints(&v), [5, 6]);
    }

    #[test]
    fn test_reserve() {
        let mut v = RecordVec::new(1, 120).unwrap();
        v.resize(100).unwrap();
        v.reserve(80).unwrap();
        assert_eq!(v.capacity(), 120);
        v.reserve(140).unwrap();
        assert_eq!(v.capacity(), 140);
        assert_eq!(v.len(), 100);

        let err = v.reserve(usize::MAX).unwrap_err();
        assert_eq!(err.status(), Status::RangeOrOverflow);
        assert_eq!(v.capacity(), 140);
        assert_eq!(v.len(), 100);
    }

    #[test]
    fn test_allocation_failure_is_atomic() {
        let alloc = BudgetAllocator::new(1);
        let mut v = RecordVec::new_in(4, 25, &alloc).unwrap();
        v.assign(Some(&ints(&[0, 1, 2])), 3).unwrap();

        let err = v.reserve(1000).unwrap_err();
        assert_eq!(err.status(), Status::AllocationFailure);
        let err = v.insert(1, None, 100).unwrap_err();
        assert_eq!(err.status(), Status::AllocationFailure);
        let err = v.resize(26).unwrap_err();
        assert_eq!(err.status(), Status::AllocationFailure);

        assert_eq!(v.capacity(), 25);
        assert_eq!(read_ints(&v), [0, 1, 2]);
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut v = RecordVec::new(1, 100).unwrap();
        v.resize(80).unwrap();
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 80);

        v.resize(10).unwrap();
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 64);

        let mut v = RecordVec::new(4, 100).unwrap();
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 16);
    }

    #[test]
    fn test_growth_zeroes_new_region() {
        let mut v = RecordVec::new(1, 64).unwrap();
        v.resize(1000).unwrap();
        assert!(v.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_copy_from_and_swap() {
        let mut a = RecordVec::new(4, 25).unwrap();
        let mut b = RecordVec::new(4, 50).unwrap();
        b.assign(Some(&ints(&[1, 2, 3])), 3).unwrap();

        a.copy_from(&b).unwrap();
        assert_eq!(a.capacity(), 25);
        assert_eq!(read_ints(&a), [1, 2, 3]);

        let c = RecordVec::new(2, 10).unwrap();
        let err = a.copy_from(&c).unwrap_err();
        assert_eq!(err.status(), Status::InvalidArgument);
        assert_eq!(read_ints(&a), [1, 2, 3]);

        let mut d = RecordVec::new(1, 100).unwrap();
        a.swap(&mut d);
        assert_eq!(a.capacity(), 100);
        assert_eq!(a.element_size(), 1);
        assert_eq!(d.capacity(), 25);
        assert_eq!(read_ints(&d), [1, 2, 3]);
    }

    #[test]
    fn test_try_clone() {
        let mut v = RecordVec::new(4, 25).unwrap();
        v.assign(Some(&ints(&[9, 8, 7])), 3).unwrap();
        let copy = v.try_clone().unwrap();
        assert_eq!(copy.as_bytes(), v.as_bytes());
        assert_eq!(copy.capacity(), 16);
    }

    #[test]
    fn test_debug_format() {
        let v = RecordVec::new(2, 4).unwrap();
        let s = format!("{v:?}");
        assert!(s.contains("len"));
        assert!(s.contains("cap"));
        assert!(s.contains("element_size"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordVec>();
    }
}
