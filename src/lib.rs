//! A reference-counted, copy-on-write **byte string**.
//!
//! * value semantics: every copy behaves as an independent string
//! * shared storage: copies share one buffer until a mutation privatizes it
//! * NUL-terminated: the buffer always carries a zero unit at its logical
//!   length, observable through
//!   [`as_slice_with_nul`](string::ZString::as_slice_with_nul)
//! * `no_std` + `alloc` friendly, with a thread-safe or thread-local
//!   reference counter
//!
//! # Examples
//!
//! ```rust
//! use zstring::ZString;
//!
//! let a = ZString::from(&b"hello world"[..]);
//! let b = a.clone(); // no copy, the buffer is shared
//! std::thread::spawn(move || assert_eq!(b, *b"hello world"));
//!
//! let mut c = a.clone();
//! c.push_slice(b"!"); // mutation privatizes c's buffer
//! assert_eq!(a, *b"hello world");
//! assert_eq!(c, *b"hello world!");
//! ```
//!
//! # Sharing protocol
//!
//! A [`ZString`](crate::string::ZString) holds at most one buffer; the
//! empty string holds none. Cloning a handle increments the buffer's
//! reference count. Before any mutation, the handle ensures the count is
//! one, cloning the buffer at its current capacity if it is not. Growth
//! and privatization are folded into a single buffer clone per mutating
//! call. The count itself is the only cross-thread contact point: with the
//! default [`Arc`] backend it is an atomic whose zero-crossing decrement
//! synchronizes the deallocation.
//!
//! # Two Backends
//!
//! The crate provides two counter backends:
//!
//! - [`Arc`]: atomic, thread-safe (the default),
//! - [`Rc`]: plain cell, thread-local.
//!
//! The crate root provides convenience type aliases:
//!
//! - [`ZString`] with the counter set to `Arc`,
//! - [`LocalZString`] with the counter set to `Rc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(feature = "std"))]
pub(crate) extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std as alloc;

pub mod backend;
mod buffer;
mod common;
mod macros;
pub mod string;

pub use backend::{Arc, Backend, Rc};
pub use common::RangeError;

/// Thread-safe shared byte string.
pub type ZString = string::ZString<Arc>;

/// Thread-local shared byte string.
pub type LocalZString = string::ZString<Rc>;
