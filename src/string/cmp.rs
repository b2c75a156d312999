//! Comparison trait implementations for `ZString`.
//!
//! Everything derives from one canonical primitive: byte-wise
//! lexicographic order on the content slices (ties broken by length).
//! Comparing never mutates and never touches the sharing state.

use core::cmp::Ordering;

use crate::alloc::borrow::Cow;
use crate::alloc::vec::Vec;

use super::ZString;
use crate::macros::{symmetric_eq, symmetric_ord};
use crate::Backend;

// Equality

impl<B> Eq for ZString<B> where B: Backend {}

impl<B1, B2> PartialEq<ZString<B1>> for ZString<B2>
where
    B1: Backend,
    B2: Backend,
{
    #[inline]
    fn eq(&self, other: &ZString<B1>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[inline]
fn eq(a: &(impl AsRef<[u8]> + ?Sized), b: &(impl AsRef<[u8]> + ?Sized)) -> bool {
    a.as_ref() == b.as_ref()
}

symmetric_eq! {
    [B: Backend] ([u8], ZString<B>) = eq;
    [B: Backend] (&[u8], ZString<B>) = eq;
    [B: Backend, const N: usize] ([u8; N], ZString<B>) = eq;
    [B: Backend] (Vec<u8>, ZString<B>) = eq;
    ['a, B: Backend] (Cow<'a, [u8]>, ZString<B>) = eq;
}

// Order

impl<B> Ord for ZString<B>
where
    B: Backend,
{
    /// Canonical three-way comparison: lexicographic over code units up to
    /// the shorter length, shorter-is-less on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zstring::ZString;
    /// let ab = ZString::from(b"ab".as_slice());
    /// let abc = ZString::from(b"abc".as_slice());
    /// let b = ZString::from(b"b".as_slice());
    /// assert!(ab < abc);
    /// assert!(abc < b);
    /// ```
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<B> PartialOrd for ZString<B>
where
    B: Backend,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn partial_cmp(
    a: &(impl AsRef<[u8]> + ?Sized),
    b: &(impl AsRef<[u8]> + ?Sized),
) -> Option<Ordering> {
    a.as_ref().partial_cmp(b.as_ref())
}

symmetric_ord! {
    [B: Backend] ([u8], ZString<B>) = partial_cmp;
    [B: Backend] (&[u8], ZString<B>) = partial_cmp;
    [B: Backend, const N: usize] ([u8; N], ZString<B>) = partial_cmp;
    [B: Backend] (Vec<u8>, ZString<B>) = partial_cmp;
    ['a, B: Backend] (Cow<'a, [u8]>, ZString<B>) = partial_cmp;
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use crate::alloc::borrow::Cow;
    use crate::alloc::vec::Vec;
    use crate::{LocalZString, ZString};

    #[test]
    fn test_eq() {
        let string = ZString::from(b"abc".as_slice());

        assert_eq!(string, string.clone());
        assert_eq!(string, *b"abc");
        assert_eq!(*b"abc", string);
        assert_eq!(string, b"abc".as_slice());
        assert_eq!(string, Vec::from(b"abc".as_slice()));
        assert_eq!(string, Cow::Borrowed(b"abc".as_slice()));

        assert_ne!(string, *b"abd");
        assert_ne!(string, *b"ab");
    }

    #[test]
    fn test_eq_cross_backend() {
        let arc = ZString::from(b"abc".as_slice());
        let local = LocalZString::from(b"abc".as_slice());
        assert_eq!(arc, local);
        assert_eq!(local, arc);
    }

    #[test]
    fn test_ord() {
        let ab = ZString::from(b"ab".as_slice());
        let abc = ZString::from(b"abc".as_slice());
        let b = ZString::from(b"b".as_slice());

        assert_eq!(ab.cmp(&abc), Ordering::Less);
        assert_eq!(abc.cmp(&b), Ordering::Less);
        assert_eq!(ab.cmp(&ab), Ordering::Equal);
        assert_eq!(b.cmp(&ab), Ordering::Greater);

        // transitivity over the derived operators
        assert!(ab < abc && abc < b && ab < b);

        assert!(ab < *b"abc");
        assert!(*b"abc" > ab);
        assert!(ab <= b"ab".as_slice());
        assert!(ab >= b"ab".as_slice());
    }

    #[test]
    fn test_ord_never_privatizes() {
        let a = ZString::from(b"abc".as_slice());
        let b = a.clone();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(a <= b);
        assert_eq!(a.ref_count(), 2);
        assert_eq!(a.as_ptr(), b.as_ptr());
    }
}
