use std::hint::black_box;

use zstring::ZString;

#[test]
fn test_eq() {
    let s = ZString::from(b"abc".as_slice());
    let s2 = black_box(s.clone());
    assert_eq!(s, s2);
}

#[test]
fn test_build_and_read_back() {
    let mut s = ZString::new();
    s.push_slice(b"Hello");
    s.push(b',');
    s.push_slice(b" world");
    let s = black_box(s + b"!");
    assert_eq!(s, *b"Hello, world!");
    assert_eq!(s.as_slice_with_nul(), b"Hello, world!\0");
}
