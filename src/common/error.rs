use std::collections::TryReserveError;

/// The error type for [`HashTable::put`][put-method], returned when the table
/// needs a larger backing array and the [`SlotAllocator`][slot-allocator] cannot
/// provide one.
///
/// A table that returns this error is left exactly as it was before the call.
///
/// [put-method]: ./struct.HashTable.html#method.put
/// [slot-allocator]: ./trait.SlotAllocator.html
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to allocate a backing array of {slots} slots")]
pub struct AllocError {
    slots: usize,
    #[source]
    cause: Option<TryReserveError>,
}

impl AllocError {
    /// Creates an error for a request of `slots` slots that was refused.
    pub fn new(slots: usize) -> Self {
        Self { slots, cause: None }
    }

    pub(crate) fn with_cause(slots: usize, cause: TryReserveError) -> Self {
        Self {
            slots,
            cause: Some(cause),
        }
    }

    // Doubling the capacity would not fit in a `usize`.
    pub(crate) fn capacity_overflow() -> Self {
        Self::new(usize::MAX)
    }

    /// Returns the number of slots that was requested.
    pub fn requested_slots(&self) -> usize {
        self.slots
    }
}
