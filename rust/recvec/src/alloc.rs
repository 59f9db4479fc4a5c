//! The raw allocator seam used by [`RecordVec`](crate::RecordVec).
//!
//! The container only ever needs three primitives: allocate a zeroed block,
//! resize a block (possibly moving it), and free a block. Allocation failure is
//! reported as `None` rather than aborting, so that the container can surface it
//! as an error and keep its previous state.

use std::{alloc::Layout, ptr::NonNull};

/// A source of raw memory blocks.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - A block returned by `allocate_zeroed` or `reallocate` is valid for reads and
///   writes of `layout.size()` (resp. `new_size`) bytes, aligned to
///   `layout.align()`, zero-filled on `allocate_zeroed`, and exclusively owned by
///   the caller until it is passed back to `reallocate` or `deallocate`.
/// - `reallocate` preserves the first `min(old_layout.size(), new_size)` bytes.
/// - When `reallocate` returns `None`, the original block is left untouched and
///   remains owned by the caller.
pub unsafe trait RawAllocator {
    /// Allocates a zero-filled block described by `layout`.
    ///
    /// `layout.size()` is never zero.
    fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes the block at `ptr` to `new_size` bytes, keeping its alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a block currently allocated by this allocator with
    /// `old_layout`, and `new_size` must be non-zero and, rounded up to
    /// `old_layout.align()`, must not exceed `isize::MAX`.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Releases the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must denote a block currently allocated by this allocator with
    /// `layout`. The block must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global Rust allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAllocator for Global {
    #[inline]
    fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert_ne!(layout.size(), 0);
        NonNull::new(unsafe { std::alloc::alloc_zeroed(layout) })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        debug_assert_ne!(new_size, 0);
        NonNull::new(unsafe { std::alloc::realloc(ptr.as_ptr(), old_layout, new_size) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

unsafe impl<A> RawAllocator for &A
where
    A: RawAllocator + ?Sized,
{
    #[inline]
    fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate_zeroed(layout)
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        unsafe { (**self).reallocate(ptr, old_layout, new_size) }
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
