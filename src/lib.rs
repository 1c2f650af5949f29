#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! Linprobe is an open-addressing hash table for byte-string keys.
//!
//! [`HashTable`] stores every entry directly in one contiguous array of slots,
//! resolves collisions by linear probing, and deletes entries by leaving
//! tombstones behind so that probe chains through them stay intact.
//!
//! - Keys are byte slices borrowed from the caller (`&'k [u8]`). Values are of
//!   any type `V` and owned by the table.
//! - Keys are hashed with 32-bit FNV-1a, which is deterministic and unseeded.
//! - The table allocates nothing until the first insertion, starts at 8 slots,
//!   and doubles its capacity before the load factor would exceed 0.75. It never
//!   shrinks.
//! - Backing arrays come from a pluggable [`SlotAllocator`]. An allocation
//!   failure is reported as an [`AllocError`] from [`HashTable::put`], never as a
//!   panic or an abort.
//!
//! # Example
//!
//! ```rust
//! use linprobe::HashTable;
//!
//! let mut table = HashTable::new();
//!
//! assert_eq!(table.put(b"apple", 3), Ok(true));
//! assert_eq!(table.put(b"pear", 5), Ok(true));
//! // Putting an existing key replaces its value.
//! assert_eq!(table.put(b"apple", 4), Ok(false));
//!
//! assert_eq!(table.get(b"apple"), Some(&4));
//! assert!(table.delete(b"pear"));
//! assert_eq!(table.get(b"pear"), None);
//! assert_eq!((table.len(), table.capacity()), (1, 8));
//! ```
//!
//! # Thread Safety
//!
//! Tables are meant for a single thread. They do no internal locking, so
//! callers who share one must guard the whole table with their own lock.
//!
//! # Logging
//!
//! With the `logging` feature enabled, tables report growth, tombstone purges
//! and allocation failures through the [`log`](https://docs.rs/log) crate.

pub mod alloc;
mod common;
mod table;

pub use alloc::{Budgeted, Global, SlotAllocator};
pub use common::error::AllocError;
pub use table::{HashTable, TableBuilder};
