//! Conversion trait implementations for `ZString`.
//!
//! All conversions copy the content: the buffer keeps its header inside
//! the allocation, so foreign allocations (`Vec<u8>`, `String`) cannot be
//! adopted as-is.

use core::borrow::Borrow;
use core::ffi::CStr;

use crate::alloc::borrow::Cow;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;

use super::ZString;
use crate::Backend;

impl<B: Backend> AsRef<[u8]> for ZString<B> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<B: Backend> Borrow<[u8]> for ZString<B> {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<B: Backend> From<&[u8]> for ZString<B> {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self::from_slice(value)
    }
}

impl<B: Backend, const N: usize> From<&[u8; N]> for ZString<B> {
    #[inline]
    fn from(value: &[u8; N]) -> Self {
        Self::from_slice(value)
    }
}

impl<B: Backend, const N: usize> From<[u8; N]> for ZString<B> {
    #[inline]
    fn from(value: [u8; N]) -> Self {
        Self::from_slice(&value)
    }
}

impl<B: Backend> From<&str> for ZString<B> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

impl<B: Backend> From<String> for ZString<B> {
    #[inline]
    fn from(value: String) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

impl<B: Backend> From<Vec<u8>> for ZString<B> {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::from_slice(&value)
    }
}

impl<B: Backend> From<Cow<'_, [u8]>> for ZString<B> {
    #[inline]
    fn from(value: Cow<'_, [u8]>) -> Self {
        Self::from_slice(&value)
    }
}

impl<B: Backend> From<&CStr> for ZString<B> {
    /// Converts a zero-terminated sequence, excluding the terminator from
    /// the content (it reappears in the buffer's own terminator slot).
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let s = ZString::from(c"abc");
    /// assert_eq!(s, *b"abc");
    /// assert_eq!(s.as_slice_with_nul(), b"abc\0");
    /// ```
    #[inline]
    fn from(value: &CStr) -> Self {
        Self::from_slice(value.to_bytes())
    }
}

impl<B: Backend> From<ZString<B>> for Vec<u8> {
    #[inline]
    fn from(value: ZString<B>) -> Self {
        value.as_slice().to_vec()
    }
}
