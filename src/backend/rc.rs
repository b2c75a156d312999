use core::cell::Cell;

use super::{sealed::Sealed, Count, UpdateResult};

/// Local (not thread-safe) reference counter.
pub struct Rc(pub(crate) Cell<usize>);

impl Sealed for Rc {}

impl Count for Rc {
    #[inline]
    fn one() -> Self {
        Self(Cell::new(1))
    }

    #[inline]
    fn incr(&self) -> UpdateResult {
        let old = self.0.get();
        if old == usize::MAX {
            UpdateResult::Overflow
        } else {
            self.0.set(old + 1);
            UpdateResult::Done
        }
    }

    #[inline]
    fn decr(&self) -> UpdateResult {
        let new = self.0.get() - 1;
        self.0.set(new);
        if new == 0 {
            UpdateResult::Overflow
        } else {
            UpdateResult::Done
        }
    }

    #[inline]
    fn is_unique(&self) -> bool {
        self.0.get() == 1
    }

    #[inline]
    fn get(&self) -> usize {
        self.0.get()
    }
}
