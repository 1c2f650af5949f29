//! Allocation providers for the backing slot arrays of a [`HashTable`][table].
//!
//! A table never grows its slot array in place. Every growth asks the provider
//! for a fresh array, moves the live entries into it, and hands the old array
//! back to the provider.
//!
//! [table]: ../struct.HashTable.html

use crate::AllocError;

use std::cell::Cell;

/// Something able to allocate and free contiguous arrays of table slots.
///
/// Implementations must return exactly `len` elements from `allocate_slots`, each
/// initialized with `T::default()`.
pub trait SlotAllocator {
    /// Allocates an array of `len` default-initialized slots.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocError`] when the request cannot be satisfied.
    fn allocate_slots<T: Default>(&self, len: usize) -> Result<Box<[T]>, AllocError>;

    /// Frees an array previously returned by `allocate_slots`.
    fn release_slots<T>(&self, slots: Box<[T]>) {
        drop(slots);
    }
}

impl<A: SlotAllocator> SlotAllocator for &A {
    #[inline]
    fn allocate_slots<T: Default>(&self, len: usize) -> Result<Box<[T]>, AllocError> {
        (**self).allocate_slots(len)
    }

    #[inline]
    fn release_slots<T>(&self, slots: Box<[T]>) {
        (**self).release_slots(slots)
    }
}

/// The global allocator.
///
/// Memory is reserved with `Vec::try_reserve_exact`, so an exhausted heap is
/// reported as an [`AllocError`] rather than aborting the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct Global;

impl SlotAllocator for Global {
    fn allocate_slots<T: Default>(&self, len: usize) -> Result<Box<[T]>, AllocError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|e| AllocError::with_cause(len, e))?;
        slots.resize_with(len, T::default);
        Ok(slots.into_boxed_slice())
    }
}

/// An allocator that serves at most `max_slots` live slots at a time.
///
/// Requests that would push the number of outstanding slots past the budget are
/// refused. Released arrays give their slots back. Note that growing a table
/// briefly holds both the old and the new array, so a table of capacity `n`
/// needs a budget of at least `3 * n` to grow to `2 * n`.
///
/// # Examples
///
/// ```rust
/// use linprobe::{Budgeted, HashTable};
///
/// let budget = Budgeted::new(8);
/// let mut table = HashTable::builder().allocator(&budget).build();
///
/// for key in [&b"a"[..], b"b", b"c", b"d", b"e", b"f"] {
///     assert_eq!(table.put(key, key.len()), Ok(true));
/// }
/// assert_eq!(budget.in_use(), 8);
///
/// // The seventh key needs 16 more slots, which is over budget.
/// assert!(table.put(b"g", 1).is_err());
/// assert_eq!(table.len(), 6);
/// ```
#[derive(Debug)]
pub struct Budgeted {
    max_slots: usize,
    in_use: Cell<usize>,
}

impl Budgeted {
    /// Constructs a new `Budgeted` allocator serving up to `max_slots` slots.
    pub fn new(max_slots: usize) -> Self {
        Self {
            max_slots,
            in_use: Cell::new(0),
        }
    }

    /// Returns the budget of this allocator.
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Returns the number of slots currently handed out and not yet released.
    pub fn in_use(&self) -> usize {
        self.in_use.get()
    }
}

impl SlotAllocator for Budgeted {
    fn allocate_slots<T: Default>(&self, len: usize) -> Result<Box<[T]>, AllocError> {
        let in_use = self.in_use.get();
        match in_use.checked_add(len) {
            Some(total) if total <= self.max_slots => {
                let slots = Global.allocate_slots(len)?;
                self.in_use.set(total);
                Ok(slots)
            }
            _ => Err(AllocError::new(len)),
        }
    }

    fn release_slots<T>(&self, slots: Box<[T]>) {
        self.in_use.set(self.in_use.get().saturating_sub(slots.len()));
        drop(slots);
    }
}
