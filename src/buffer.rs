//! Shared heap buffer.
//!
//! One buffer is one allocation: a [`Header`] (reference count, capacity,
//! logical length) followed by `capacity + 1` bytes of content, the extra
//! slot holding the zero terminator. Invariant: `data[len] == 0` whenever
//! no exclusive mutation is in flight.
//!
//! Sharing goes through [`Clone`] (count +1) and [`Drop`] (count −1, free
//! on the zero-crossing). Content mutation is only legal while the count
//! is one; [`Buffer::set_len`] is the single place the terminator gets
//! rewritten.

use core::mem::{align_of, size_of};
use core::ptr::{self, NonNull};
use core::slice;

use crate::alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use crate::backend::{Backend, Count, UpdateResult};


/// Buffer header, stored at the front of the allocation.
#[repr(C)]
struct Header<B> {
    count: B,
    capacity: usize,
    len: usize,
}

/// Owned-or-shared reference to a heap buffer.
///
/// Semantically this is one strong reference: cloning increments the
/// count, dropping decrements it and releases the allocation when the
/// count reaches zero.
pub(crate) struct Buffer<B: Backend> {
    ptr: NonNull<Header<B>>,
}

impl<B: Backend> Buffer<B> {
    const HEADER_SIZE: usize = size_of::<Header<B>>();

    /// Fixed per-allocation overhead: one allocator bookkeeping word, the
    /// header, and the terminator slot.
    const OVERHEAD: usize = size_of::<usize>() + Self::HEADER_SIZE + 1;

    /// Largest representable capacity.
    pub(crate) const MAX_CAPACITY: usize = (isize::MAX as usize) - Self::OVERHEAD;

    /// Computes the allocation layout for a given capacity.
    #[inline]
    fn layout(capacity: usize) -> Layout {
        debug_assert!(capacity <= Self::MAX_CAPACITY);
        let size = Self::HEADER_SIZE + capacity + 1;
        // SAFETY: capacity is bounded by `MAX_CAPACITY`, so even rounded up
        // to the header alignment the size stays below `isize::MAX`
        unsafe { Layout::from_size_align_unchecked(size, align_of::<Header<B>>()) }
    }

    /// Smallest capacity at least `min` such that the whole allocation,
    /// overhead included, is a power of two.
    ///
    /// Amortizes repeated growth while keeping allocator-friendly block
    /// sizes. Falls back to `min` exactly when the power of two would
    /// exceed the address-space half anyway.
    ///
    /// # Panics
    ///
    /// Panics if `min` exceeds [`Self::MAX_CAPACITY`].
    pub(crate) fn amortized_capacity(min: usize) -> usize {
        assert!(min <= Self::MAX_CAPACITY, "capacity overflow");
        let total = (min + Self::OVERHEAD).next_power_of_two();
        if total > isize::MAX as usize {
            min
        } else {
            total - Self::OVERHEAD
        }
    }

    /// Allocates a fresh buffer: count 1, length 0, terminator set.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`Self::MAX_CAPACITY`]. Allocation
    /// failure goes through [`handle_alloc_error`].
    pub(crate) fn allocate(capacity: usize) -> Self {
        assert!(capacity <= Self::MAX_CAPACITY, "capacity overflow");
        let layout = Self::layout(capacity);
        // SAFETY: the layout size is non-zero (header + terminator)
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<Header<B>>()) else {
            handle_alloc_error(layout);
        };
        // SAFETY: freshly allocated, properly aligned for the header
        unsafe {
            ptr.as_ptr().write(Header {
                count: B::one(),
                capacity,
                len: 0,
            });
        }
        let buffer = Self { ptr };
        // SAFETY: capacity >= 0, so the terminator slot exists
        unsafe { buffer.data_ptr().write(0) };
        buffer
    }

    /// Allocates a fresh buffer holding a copy of `content`.
    ///
    /// Precondition: `capacity >= content.len()`.
    pub(crate) fn copy_of(content: &[u8], capacity: usize) -> Self {
        debug_assert!(capacity >= content.len());
        let mut buffer = Self::allocate(capacity);
        // SAFETY: the fresh buffer is unique and has room for `content`
        unsafe {
            ptr::copy_nonoverlapping(content.as_ptr(), buffer.data_ptr(), content.len());
            buffer.set_len(content.len());
        }
        buffer
    }

    /// Allocates a private copy of this buffer's content.
    ///
    /// Precondition: `capacity >= self.len()`.
    pub(crate) fn duplicate(&self, capacity: usize) -> Self {
        Self::copy_of(self.as_slice(), capacity)
    }

    #[inline]
    fn header(&self) -> &Header<B> {
        // SAFETY: type invariant, the pointer is valid while any reference
        // is live
        unsafe { self.ptr.as_ref() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.header().len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.header().capacity
    }

    /// Pointer to the first content byte.
    #[inline]
    pub(crate) fn data_ptr(&self) -> *mut u8 {
        // SAFETY: the content starts right after the header, inside the
        // same allocation
        unsafe { self.ptr.as_ptr().cast::<u8>().add(Self::HEADER_SIZE) }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        // SAFETY: `len` bytes of content are initialized
        unsafe { slice::from_raw_parts(self.data_ptr(), self.len()) }
    }

    /// Content plus the terminator byte.
    #[inline]
    pub(crate) fn as_slice_with_nul(&self) -> &[u8] {
        // SAFETY: `data[len]` is the terminator, initialized since
        // allocation and rewritten by every `set_len`
        unsafe { slice::from_raw_parts(self.data_ptr(), self.len() + 1) }
    }

    /// Mutable view of the content.
    ///
    /// # Safety
    ///
    /// The buffer must be uniquely owned (see [`Self::is_unique`]).
    #[inline]
    pub(crate) unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: uniqueness is the caller's precondition; no other handle
        // can observe the content
        unsafe { slice::from_raw_parts_mut(self.data_ptr(), self.len()) }
    }

    /// Sets the logical length and rewrites the terminator.
    ///
    /// # Safety
    ///
    /// The buffer must be uniquely owned, `new_len <= self.capacity()`,
    /// and the first `new_len` content bytes must be initialized.
    #[inline]
    pub(crate) unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        // SAFETY: per the capacity bound the terminator slot at `new_len`
        // is inside the allocation
        unsafe {
            (*self.ptr.as_ptr()).len = new_len;
            self.data_ptr().add(new_len).write(0);
        }
    }

    /// Checks whether this is the only reference to the buffer.
    ///
    /// A `true` result licenses in-place mutation: it acquires all writes
    /// made through references since dropped on other threads.
    #[inline]
    pub(crate) fn is_unique(&self) -> bool {
        self.header().count.is_unique()
    }

    /// Current reference count (instrumentation).
    #[inline]
    pub(crate) fn ref_count(&self) -> usize {
        self.header().count.get()
    }
}

impl<B: Backend> Clone for Buffer<B> {
    /// Shares the buffer, incrementing its reference count.
    fn clone(&self) -> Self {
        if self.header().count.incr() == UpdateResult::Overflow {
            panic!("reference count overflow");
        }
        Self { ptr: self.ptr }
    }
}

impl<B: Backend> Drop for Buffer<B> {
    fn drop(&mut self) {
        if self.header().count.decr() == UpdateResult::Overflow {
            // last reference; the decrement's Acquire side ordered all
            // prior accesses before this free
            let layout = Self::layout(self.capacity());
            // SAFETY: same layout as the allocation, no live reference left
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}
