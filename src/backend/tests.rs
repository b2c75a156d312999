use super::{Arc, Count, Rc, UpdateResult};

fn check_basic<C: Count>() {
    let count = C::one();
    assert_eq!(count.get(), 1);
    assert!(count.is_unique());

    assert_eq!(count.incr(), UpdateResult::Done);
    assert_eq!(count.get(), 2);
    assert!(!count.is_unique());

    assert_eq!(count.decr(), UpdateResult::Done);
    assert_eq!(count.get(), 1);
    assert!(count.is_unique());

    assert_eq!(count.decr(), UpdateResult::Overflow);
    assert_eq!(count.get(), 0);
}

#[test]
fn test_rc() {
    check_basic::<Rc>();
}

#[test]
fn test_arc() {
    check_basic::<Arc>();
}

#[test]
fn test_arc_incr_saturated() {
    use core::sync::atomic::Ordering;

    let count = Arc::one();
    count.0.store(usize::MAX, Ordering::Relaxed);
    assert_eq!(count.incr(), UpdateResult::Overflow);
    assert_eq!(count.get(), usize::MAX);
}

#[test]
fn test_rc_incr_saturated() {
    let count = Rc::one();
    count.0.set(usize::MAX);
    assert_eq!(count.incr(), UpdateResult::Overflow);
    assert_eq!(count.get(), usize::MAX);
}
