//! Cross-thread sharing of `ZString` handles.

#![cfg(feature = "std")]

use std::thread;

use zstring::ZString;

#[test]
fn test_shared_reads() {
    let s = ZString::from(b"shared across threads".as_slice());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = s.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let local = s.clone();
                    assert_eq!(local, *b"shared across threads");
                    assert_eq!(local.as_slice_with_nul().last(), Some(&0));
                    drop(local);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(s, *b"shared across threads");
    assert!(s.is_unique());
}

#[test]
fn test_mutate_in_thread() {
    let s = ZString::from(b"base".as_slice());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mut local = s.clone();
            thread::spawn(move || {
                local.push(b'0' + i);
                assert_eq!(&local[..4], b"base");
                assert_eq!(local[4], b'0' + i);
                local
            })
        })
        .collect();
    for handle in handles {
        let local = handle.join().unwrap();
        assert!(local.is_unique());
    }
    // every thread privatized its copy; the original is untouched
    assert_eq!(s, *b"base");
    assert!(s.is_unique());
}

#[test]
fn test_drop_race() {
    // the last handle standing must observe all prior writes before
    // releasing the allocation
    for _ in 0..100 {
        let s = ZString::from(b"contended".as_slice());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = s.clone();
                thread::spawn(move || drop(s))
            })
            .collect();
        drop(s);
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
