//! Sealed counter trait and the built-in reference-counting backends.
//!
//! A backend decides how buffer sharing is counted:
//!
//! - [`Arc`]: atomic counter, handles may be sent across threads,
//! - [`Rc`]: plain cell counter, strictly thread-local.
//!
//! Only the counter is ever touched concurrently; buffer content is never
//! mutated while shared, so it needs no synchronization of its own.

mod atomic;
mod rc;

#[cfg(test)]
mod tests;

pub use atomic::Arc;
pub use rc::Rc;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Result of a counter update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// The count was updated.
    Done,
    /// The update left the counter's domain: an increment would overflow,
    /// or a decrement dropped the last reference.
    Overflow,
}

/// Reference counter.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Count: sealed::Sealed {
    /// Creates a new counter that starts at one.
    fn one() -> Self;

    /// Increments the counter.
    ///
    /// Returns [`UpdateResult::Overflow`] without updating if the counter
    /// is saturated.
    #[doc(hidden)]
    fn incr(&self) -> UpdateResult;

    /// Decrements the counter.
    ///
    /// Returns [`UpdateResult::Overflow`] if the counter reaches zero. For
    /// an atomic counter, the zero-crossing decrement synchronizes-with
    /// every prior access made through other references, making it safe to
    /// free the counted allocation afterwards.
    #[doc(hidden)]
    fn decr(&self) -> UpdateResult;

    /// Checks whether the count is exactly one.
    ///
    /// For an atomic counter, a `true` result acquires every write made
    /// through references since dropped on other threads.
    #[doc(hidden)]
    fn is_unique(&self) -> bool;

    /// Returns the current value of the counter.
    #[doc(hidden)]
    fn get(&self) -> usize;
}

/// Marker trait for counter backends usable by
/// [`ZString`](crate::string::ZString).
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Backend: Count + 'static {}

impl Backend for Rc {}

#[cfg(target_has_atomic = "ptr")]
impl Backend for Arc {}
