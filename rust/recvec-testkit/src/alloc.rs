//! Allocators that wrap the global allocator to count or refuse requests.

use std::{alloc::Layout, cell::Cell, ptr::NonNull};

use recvec::{Global, RawAllocator};

/// Counts allocation calls and tracks the number of live bytes.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    allocations: Cell<usize>,
    reallocations: Cell<usize>,
    deallocations: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl CountingAllocator {
    pub fn new() -> CountingAllocator {
        Default::default()
    }

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn reallocations(&self) -> usize {
        self.reallocations.get()
    }

    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }

    /// Bytes currently allocated through this allocator.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.get()
    }
}

unsafe impl RawAllocator for CountingAllocator {
    fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        let ptr = Global.allocate_zeroed(layout)?;
        self.allocations.set(self.allocations.get() + 1);
        self.live_bytes.set(self.live_bytes.get() + layout.size());
        Some(ptr)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        let ptr = unsafe { Global.reallocate(ptr, old_layout, new_size) }?;
        self.reallocations.set(self.reallocations.get() + 1);
        self.live_bytes
            .set(self.live_bytes.get() - old_layout.size() + new_size);
        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) };
        self.deallocations.set(self.deallocations.get() + 1);
        self.live_bytes.set(self.live_bytes.get() - layout.size());
    }
}

/// Delegates to the global allocator until armed; while armed, every
/// allocation and reallocation request is refused.
///
/// Deallocation always succeeds.
#[derive(Debug, Default)]
pub struct FailingAllocator {
    armed: Cell<bool>,
    refused: Cell<usize>,
}

impl FailingAllocator {
    pub fn new() -> FailingAllocator {
        Default::default()
    }

    /// Creates an allocator that refuses requests from the start.
    pub fn armed() -> FailingAllocator {
        let alloc = FailingAllocator::new();
        alloc.arm();
        alloc
    }

    pub fn arm(&self) {
        self.armed.set(true);
    }

    pub fn disarm(&self) {
        self.armed.set(false);
    }

    /// Number of requests refused so far.
    pub fn refused(&self) -> usize {
        self.refused.get()
    }

    fn refuse(&self) -> bool {
        if self.armed.get() {
            self.refused.set(self.refused.get() + 1);
            true
        } else {
            false
        }
    }
}

unsafe impl RawAllocator for FailingAllocator {
    fn allocate_zeroed(&self, layout: Layout) -> Option<NonNull<u8>> {
        if self.refuse() {
            return None;
        }
        Global.allocate_zeroed(layout)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if self.refuse() {
            return None;
        }
        unsafe { Global.reallocate(ptr, old_layout, new_size) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) }
    }
}
