//! Byte string.
//!
//! This module provides the [`ZString`] type as well as the associated
//! helper and error types.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, Range, RangeBounds};
use core::ptr;
use core::slice;

use crate::backend::Backend;
use crate::buffer::Buffer;
use crate::common::{self, RangeError};
use crate::Arc;

mod cmp;
mod concat;
mod convert;

#[cfg(feature = "serde")]
pub mod serde;


/// Shared byte string, i.e. a cheaply clonable, copy-on-write, growable,
/// NUL-terminated byte sequence.
///
/// # Examples
///
/// You can create a `ZString` from a [byte slice (&`[u8]`)][slice], an
/// owned byte string (`Vec<u8>`), or a C string slice
/// ([`&CStr`][core::ffi::CStr]) with [`From`]:
///
/// ```
/// # use zstring::ZString;
/// let hello = ZString::from(b"Hello".as_slice());
/// ```
///
/// Clones share the underlying buffer, whatever the length:
///
/// ```
/// # use zstring::ZString;
/// let hello = ZString::from(b"Hello".as_slice());
/// let h2 = hello.clone(); // no allocation, no copy
/// assert_eq!(h2.as_ptr(), hello.as_ptr());
/// ```
///
/// Mutating a clone privatizes its buffer first, so every handle behaves
/// like an independent string:
///
/// ```
/// # use zstring::ZString;
/// let a = ZString::from(b"Hello".as_slice());
/// let mut b = a.clone();
/// b.push_slice(b", world");
/// assert_eq!(a, *b"Hello");
/// assert_eq!(b, *b"Hello, world");
/// ```
///
/// # Representation
///
/// A `ZString` holds at most one reference-counted heap buffer. The empty
/// string holds none: default construction never allocates. The buffer
/// stores its reference count, capacity and length inline, followed by the
/// content and a zero terminator at the logical length.
pub struct ZString<B = Arc>
where
    B: Backend,
{
    buffer: Option<Buffer<B>>,
}

impl<B> ZString<B>
where
    B: Backend,
{
    /// Creates an empty `ZString`.
    ///
    /// Does not allocate: the empty string is a distinguished state
    /// without a buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let s = ZString::new();
    /// assert!(s.is_empty());
    /// assert_eq!(s.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: None }
    }

    /// Creates an empty `ZString` with at least the given capacity.
    ///
    /// The actual capacity is rounded up by the growth policy so that the
    /// whole allocation is a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::with_capacity(42);
    /// let p = s.as_ptr();
    /// for _ in 0..42 {
    ///     s.push(b'*');
    /// }
    /// assert_eq!(s, [b'*'; 42]);
    /// assert_eq!(s.as_ptr(), p);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            Self::new()
        } else {
            Self {
                buffer: Some(Buffer::allocate(Buffer::<B>::amortized_capacity(capacity))),
            }
        }
    }

    /// Creates a new `ZString` by copying a byte slice.
    #[inline]
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            Self::new()
        } else {
            Self {
                buffer: Some(Buffer::copy_of(
                    bytes,
                    Buffer::<B>::amortized_capacity(bytes.len()),
                )),
            }
        }
    }

    /// Creates a new `ZString` holding `count` copies of `unit`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let s = ZString::from_elem(b'x', 4);
    /// assert_eq!(s, *b"xxxx");
    /// ```
    #[must_use]
    pub fn from_elem(unit: u8, count: usize) -> Self {
        let mut this = Self::new();
        this.push_repeat(unit, count);
        this
    }

    /// Returns the length of this `ZString` in bytes, not counting the
    /// terminator.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.buffer {
            Some(buffer) => buffer.len(),
            None => 0,
        }
    }

    /// Returns `true` if this `ZString` is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity of the underlying buffer, `0` for the empty
    /// state.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        match &self.buffer {
            Some(buffer) => buffer.capacity(),
            None => 0,
        }
    }

    /// Returns the largest length a `ZString` can represent.
    #[inline]
    #[must_use]
    pub const fn max_len() -> usize {
        Buffer::<B>::MAX_CAPACITY
    }

    /// Extracts a slice of the entire string.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        match &self.buffer {
            Some(buffer) => buffer.as_slice(),
            None => b"",
        }
    }

    /// Extracts a slice of the entire string **including** the zero
    /// terminator.
    ///
    /// The result is always one byte longer than [`len`](Self::len) and
    /// ends with `0`, even for the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let s = ZString::from(b"abc".as_slice());
    /// assert_eq!(s.as_slice_with_nul(), b"abc\0");
    /// assert_eq!(ZString::new().as_slice_with_nul(), b"\0");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice_with_nul(&self) -> &[u8] {
        match &self.buffer {
            Some(buffer) => buffer.as_slice_with_nul(),
            None => b"\0",
        }
    }

    /// Returns a raw pointer to a NUL-terminated byte sequence of
    /// [`len`](Self::len) bytes.
    ///
    /// Valid until the handle is mutated or dropped.
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_slice_with_nul().as_ptr()
    }

    /// Checks whether this handle is the only one referencing its buffer.
    ///
    /// The empty state is trivially unique.
    #[inline]
    #[must_use]
    pub fn is_unique(&self) -> bool {
        match &self.buffer {
            Some(buffer) => buffer.is_unique(),
            None => true,
        }
    }

    /// Returns the number of handles sharing this buffer, `0` for the
    /// empty state.
    ///
    /// Instrumentation; the value is immediately stale under concurrent
    /// cloning.
    #[inline]
    #[must_use]
    pub fn ref_count(&self) -> usize {
        match &self.buffer {
            Some(buffer) => buffer.ref_count(),
            None => 0,
        }
    }

    /// Privatizes the buffer at its current capacity (the copy-on-write
    /// trigger).
    fn make_unique(&mut self) {
        if let Some(buffer) = &mut self.buffer {
            if !buffer.is_unique() {
                *buffer = buffer.duplicate(buffer.capacity());
            }
        }
    }

    /// Ensures an exclusively owned buffer with capacity at least `min`.
    ///
    /// Privatization and growth are folded into at most **one** buffer
    /// clone: a shared buffer that also needs to grow is duplicated
    /// straight at the grown capacity. An exclusively owned buffer with
    /// enough capacity is left untouched (checked by capacity, not
    /// content).
    fn reserve_for(&mut self, min: usize) -> &mut Buffer<B> {
        debug_assert!(min > 0);
        match &mut self.buffer {
            Some(buffer) => {
                if buffer.capacity() < min {
                    *buffer = buffer.duplicate(Buffer::<B>::amortized_capacity(min));
                } else if !buffer.is_unique() {
                    *buffer = buffer.duplicate(buffer.capacity());
                }
            }
            none @ None => {
                *none = Some(Buffer::allocate(Buffer::<B>::amortized_capacity(min)));
            }
        }
        // SAFETY: a buffer was put in place just above
        unsafe { self.buffer.as_mut().unwrap_unchecked() }
    }

    /// Locates `slice` inside this handle's own buffer, as offsets.
    ///
    /// Used to capture self-referential sources by value before an
    /// ownership transition or reallocation invalidates the borrowed
    /// window.
    fn range_of(&self, slice: &[u8]) -> Option<Range<usize>> {
        let buffer = self.buffer.as_ref()?;
        let data = buffer.data_ptr() as usize;
        let start = slice.as_ptr() as usize;
        let end = start.checked_add(slice.len())?;
        if start >= data && end <= data + buffer.len() {
            Some(start - data..end - data)
        } else {
            None
        }
    }

    /// Reserves capacity for at least `additional` more bytes.
    ///
    /// Never shrinks. On an exclusively owned handle with enough capacity
    /// this is a no-op; otherwise the buffer is reallocated through the
    /// growth policy (and privatized, `reserve` being a mutating
    /// operation).
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds [`max_len`](Self::max_len).
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"abc".as_slice());
    /// s.reserve(100);
    /// assert!(s.capacity() >= 103);
    /// assert_eq!(s, *b"abc");
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let Some(min) = self.len().checked_add(additional) else {
            panic!("capacity overflow")
        };
        if min == 0 {
            return;
        }
        self.reserve_for(min);
    }

    /// Reallocates to the exact capacity required by the current length.
    ///
    /// An empty handle releases its buffer entirely. An exclusively owned
    /// buffer already at the minimal capacity is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::with_capacity(100);
    /// s.push_slice(b"abc");
    /// s.shrink_to_fit();
    /// assert_eq!(s.capacity(), 3);
    /// assert_eq!(s, *b"abc");
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.is_empty() {
            self.buffer = None;
            return;
        }
        let Some(buffer) = &mut self.buffer else {
            return;
        };
        if buffer.is_unique() && buffer.capacity() == buffer.len() {
            return;
        }
        *buffer = buffer.duplicate(buffer.len());
    }

    /// Appends a byte to this `ZString`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut bytes = ZString::from(b"abc".as_slice());
    /// bytes.push(b'1');
    /// bytes.push(b'2');
    /// assert_eq!(bytes, *b"abc12");
    /// ```
    #[inline]
    pub fn push(&mut self, unit: u8) {
        let len = self.len();
        let buffer = self.reserve_for(len + 1);
        // SAFETY: the buffer is unique with room for one more byte
        unsafe {
            buffer.data_ptr().add(len).write(unit);
            buffer.set_len(len + 1);
        }
    }

    /// Appends all bytes of the slice to this `ZString`.
    ///
    /// `addition` may borrow from this very string's buffer (through a
    /// sharing clone): the source window is captured as offsets before any
    /// reallocation, so the append stays correct across the ownership
    /// transition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut bytes = ZString::from(b"abc".as_slice());
    /// bytes.push_slice(b"123");
    /// assert_eq!(bytes, *b"abc123");
    /// ```
    #[doc(alias = "append")]
    #[doc(alias = "extend_from_slice")]
    pub fn push_slice(&mut self, addition: &[u8]) {
        if addition.is_empty() {
            return;
        }
        let aliased = self.range_of(addition);
        let len = self.len();
        let Some(new_len) = len.checked_add(addition.len()) else {
            panic!("capacity overflow")
        };
        let buffer = self.reserve_for(new_len);
        let data = buffer.data_ptr();
        // SAFETY: the buffer is unique with room for `addition`; an
        // aliasing source is re-read from the private buffer, whose first
        // `len` bytes equal the pre-transition content; source and
        // destination cannot overlap, the destination lies past `len`
        unsafe {
            match aliased {
                Some(range) => ptr::copy_nonoverlapping(
                    data.add(range.start),
                    data.add(len),
                    range.len(),
                ),
                None => {
                    ptr::copy_nonoverlapping(addition.as_ptr(), data.add(len), addition.len());
                }
            }
            buffer.set_len(new_len);
        }
    }

    /// Appends `count` copies of `unit`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"ab".as_slice());
    /// s.push_repeat(b'c', 3);
    /// assert_eq!(s, *b"abccc");
    /// ```
    pub fn push_repeat(&mut self, unit: u8, count: usize) {
        if count == 0 {
            return;
        }
        let len = self.len();
        let Some(new_len) = len.checked_add(count) else {
            panic!("capacity overflow")
        };
        let buffer = self.reserve_for(new_len);
        // SAFETY: the buffer is unique with room for `count` more bytes
        unsafe {
            buffer.data_ptr().add(len).write_bytes(unit, count);
            buffer.set_len(new_len);
        }
    }

    /// Appends a copy of a sub-range of this string to itself.
    ///
    /// This is the self-append operation: the source range is resolved to
    /// offsets before the buffer may move, and copied after it did.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the range is out of bounds; the string
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"ab".as_slice());
    /// s.try_extend_from_within(..).unwrap();
    /// assert_eq!(s, *b"abab");
    /// assert!(s.try_extend_from_within(2..9).is_err());
    /// ```
    pub fn try_extend_from_within(
        &mut self,
        src: impl RangeBounds<usize>,
    ) -> Result<(), RangeError> {
        let src = common::range(src, self.len())?;
        if src.is_empty() {
            return Ok(());
        }
        let len = self.len();
        let buffer = self.reserve_for(len + src.len());
        let data = buffer.data_ptr();
        // SAFETY: `src` is in bounds of the old content, which the (maybe
        // fresh) unique buffer starts with; the destination lies past it
        unsafe {
            ptr::copy_nonoverlapping(data.add(src.start), data.add(len), src.len());
            buffer.set_len(len + src.len());
        }
        Ok(())
    }

    /// Appends a copy of a sub-range of this string to itself.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"ab".as_slice());
    /// s.extend_from_within(1..);
    /// assert_eq!(s, *b"abb");
    /// ```
    #[track_caller]
    pub fn extend_from_within(&mut self, src: impl RangeBounds<usize>) {
        match self.try_extend_from_within(src) {
            Ok(()) => (),
            Err(err) => panic!("{}", err),
        }
    }

    /// Removes the last byte from this `ZString` and returns it, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut h = ZString::from(&[1, 2, 3][..]);
    /// assert_eq!(h.pop(), Some(3));
    /// assert_eq!(h, [1, 2]);
    /// assert_eq!(ZString::new().pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<u8> {
        let len = self.len();
        if len == 0 {
            None
        } else {
            let unit = self.as_slice()[len - 1];
            self.truncate(len - 1);
            Some(unit)
        }
    }

    /// Shortens this `ZString`, keeping the first `new_len` bytes.
    ///
    /// Does nothing if `new_len` is greater than the current length. The
    /// capacity is kept (but truncating to zero releases a shared buffer,
    /// see [`clear`](Self::clear)).
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }
        if new_len == 0 {
            self.clear();
            return;
        }
        let buffer = self.reserve_for(new_len);
        // SAFETY: privatized above; new_len < len <= capacity
        unsafe { buffer.set_len(new_len) };
    }

    /// Truncates this `ZString`, removing all contents.
    ///
    /// An exclusively owned buffer is kept around at its capacity for
    /// reuse. A shared buffer is simply released, leaving the canonical
    /// empty state, since cloning it only to empty the copy would waste an
    /// allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"foo".as_slice());
    /// let capacity = s.capacity();
    /// s.clear();
    /// assert!(s.is_empty());
    /// assert_eq!(s.capacity(), capacity);
    ///
    /// let mut shared = ZString::from(b"foo".as_slice());
    /// let keeper = shared.clone();
    /// shared.clear();
    /// assert_eq!(shared.capacity(), 0);
    /// assert_eq!(keeper, *b"foo");
    /// ```
    pub fn clear(&mut self) {
        if let Some(buffer) = &mut self.buffer {
            if buffer.is_unique() {
                // SAFETY: unique, 0 <= capacity
                unsafe { buffer.set_len(0) };
            } else {
                self.buffer = None;
            }
        }
    }

    /// Replaces the entire content with a copy of `bytes`.
    ///
    /// Reuses the buffer when it is exclusively owned and large enough.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let mut s = ZString::from(b"some long enough text".as_slice());
    /// let p = s.as_ptr();
    /// s.assign(b"shorter");
    /// assert_eq!(s, *b"shorter");
    /// assert_eq!(s.as_ptr(), p);
    /// ```
    pub fn assign(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            self.clear();
            return;
        }
        if let Some(buffer) = &mut self.buffer {
            if buffer.is_unique() && buffer.capacity() >= bytes.len() {
                // SAFETY: `bytes` cannot alias an exclusively owned buffer,
                // a second live borrow of it would contradict uniqueness
                unsafe {
                    ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.data_ptr(), bytes.len());
                    buffer.set_len(bytes.len());
                }
                return;
            }
        }
        // build the replacement before releasing this reference: `bytes`
        // may borrow from the old buffer through a sharing clone
        let replacement = Buffer::copy_of(bytes, Buffer::<B>::amortized_capacity(bytes.len()));
        self.buffer = Some(replacement);
    }

    /// Returns a mutable view of this `ZString`, privatizing the buffer
    /// first.
    ///
    /// This is the write-access path for iteration and indexed mutation;
    /// it triggers the ownership transition even if nothing is written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let a = ZString::from(b"foo".as_slice());
    /// let mut b = a.clone();
    /// b.to_mut_slice().copy_from_slice(b"bar");
    /// assert_eq!(a, *b"foo");
    /// assert_eq!(b, *b"bar");
    /// ```
    #[doc(alias = "make_mut")]
    pub fn to_mut_slice(&mut self) -> &mut [u8] {
        self.make_unique();
        match &mut self.buffer {
            // SAFETY: `make_unique` above ensures exclusive ownership
            Some(buffer) => unsafe { buffer.as_mut_slice() },
            None => &mut [],
        }
    }
}

impl<B: Backend> Clone for ZString<B> {
    /// Shares the buffer: increments its reference count without copying
    /// any content.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<B: Backend> Default for ZString<B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Deref for ZString<B> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<B: Backend> fmt::Debug for ZString<B> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<B: Backend> Hash for ZString<B> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, B: Backend> IntoIterator for &'a ZString<B> {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

// SAFETY: sending or sharing a handle moves clone/drop (and thus the final
// release) to other threads, which requires the counter to be both `Send`
// and `Sync`, like for a standard shared pointer
unsafe impl<B: Backend + Send + Sync> Send for ZString<B> {}

// SAFETY: see above; `&ZString` only exposes reads and counter updates
unsafe impl<B: Backend + Send + Sync> Sync for ZString<B> {}
