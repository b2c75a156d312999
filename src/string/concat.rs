//! Concatenation trait implementations for `ZString`.
//!
//! Everything funnels into the canonical append primitive,
//! [`ZString::push_slice`]. `Add` consumes its left operand and appends in
//! place, reusing its storage when it is not shared; `a.clone() + &b` is
//! the always-copy fallback with the same observable result.

use core::ops::{Add, AddAssign};

use super::ZString;
use crate::Backend;

impl<B, B2> Add<&ZString<B2>> for ZString<B>
where
    B: Backend,
    B2: Backend,
{
    type Output = Self;

    /// Concatenates two strings.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let hello = ZString::from(b"Hello, ".as_slice());
    /// let world = ZString::from(b"world!".as_slice());
    /// assert_eq!(hello + &world, *b"Hello, world!");
    /// ```
    #[inline]
    fn add(mut self, rhs: &ZString<B2>) -> Self {
        self.push_slice(rhs.as_slice());
        self
    }
}

impl<B: Backend> Add<&[u8]> for ZString<B> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &[u8]) -> Self {
        self.push_slice(rhs);
        self
    }
}

impl<B: Backend, const N: usize> Add<&[u8; N]> for ZString<B> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &[u8; N]) -> Self {
        self.push_slice(rhs);
        self
    }
}

impl<B: Backend> Add<u8> for ZString<B> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: u8) -> Self {
        self.push(rhs);
        self
    }
}

impl<B, B2> AddAssign<&ZString<B2>> for ZString<B>
where
    B: Backend,
    B2: Backend,
{
    #[inline]
    fn add_assign(&mut self, rhs: &ZString<B2>) {
        self.push_slice(rhs.as_slice());
    }
}

impl<B: Backend> AddAssign<&[u8]> for ZString<B> {
    #[inline]
    fn add_assign(&mut self, rhs: &[u8]) {
        self.push_slice(rhs);
    }
}

impl<B: Backend, const N: usize> AddAssign<&[u8; N]> for ZString<B> {
    #[inline]
    fn add_assign(&mut self, rhs: &[u8; N]) {
        self.push_slice(rhs);
    }
}

impl<B: Backend> AddAssign<u8> for ZString<B> {
    #[inline]
    fn add_assign(&mut self, rhs: u8) {
        self.push(rhs);
    }
}

impl<B: Backend> Extend<u8> for ZString<B> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for unit in iter {
            self.push(unit);
        }
    }
}

impl<'a, B: Backend> Extend<&'a u8> for ZString<B> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, B: Backend> Extend<&'a [u8]> for ZString<B> {
    fn extend<I: IntoIterator<Item = &'a [u8]>>(&mut self, iter: I) {
        for slice in iter {
            self.push_slice(slice);
        }
    }
}

impl<B: Backend> FromIterator<u8> for ZString<B> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<'a, B: Backend> FromIterator<&'a u8> for ZString<B> {
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}
