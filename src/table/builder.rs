use super::HashTable;
use crate::alloc::{Global, SlotAllocator};

use std::marker::PhantomData;

/// Builds a [`HashTable`][table-struct] with various configuration knobs.
///
/// [table-struct]: ./struct.HashTable.html
///
/// # Examples
///
/// ```rust
/// use linprobe::{Budgeted, TableBuilder};
///
/// let budget = Budgeted::new(1024);
///
/// let mut table = TableBuilder::new()
///     // A name shown in the logs of this table (with the `logging` feature).
///     .name("symbols")
///     // Take backing arrays from a bounded allocator.
///     .allocator(&budget)
///     // Create the table.
///     .build();
///
/// table.put(b"alice", 1).unwrap();
/// assert_eq!(table.get(b"alice"), Some(&1));
/// assert_eq!(table.name(), Some("symbols"));
/// ```
///
#[must_use]
pub struct TableBuilder<V, A = Global> {
    name: Option<String>,
    allocator: A,
    value_type: PhantomData<V>,
}

impl<V> Default for TableBuilder<V, Global> {
    fn default() -> Self {
        Self {
            name: None,
            allocator: Global,
            value_type: PhantomData,
        }
    }
}

impl<V> TableBuilder<V, Global> {
    /// Construct a new `TableBuilder` that will be used to build a `HashTable`
    /// backed by the global allocator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, A: SlotAllocator> TableBuilder<V, A> {
    /// Sets the name of the table. Currently the name is used for identification
    /// only in logging messages.
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the allocation provider the table takes its backing arrays from.
    pub fn allocator<B: SlotAllocator>(self, allocator: B) -> TableBuilder<V, B> {
        TableBuilder {
            name: self.name,
            allocator,
            value_type: PhantomData,
        }
    }

    /// Builds a `HashTable<'k, V, A>`.
    ///
    /// No memory is allocated until the first `put`.
    pub fn build<'k>(self) -> HashTable<'k, V, A> {
        HashTable::with_everything(self.name, self.allocator)
    }
}

#[cfg(test)]
mod tests {
    use super::TableBuilder;
    use crate::{Budgeted, HashTable};

    #[test]
    fn build_table() {
        // HashTable<&str>
        let mut table = TableBuilder::new().build();

        assert_eq!(table.name(), None);
        assert_eq!(table.capacity(), 0);

        table.put(b"a", "Alice").unwrap();
        assert_eq!(table.get(b"a"), Some(&"Alice"));

        let budget = Budgeted::new(64);
        let mut table = HashTable::builder()
            .name("people")
            .allocator(&budget)
            .build();

        assert_eq!(table.name(), Some("people"));
        assert_eq!(budget.in_use(), 0);

        table.put(b"a", "Alice").unwrap();
        assert_eq!(table.get(b"a"), Some(&"Alice"));
        assert_eq!(budget.in_use(), 8);
    }

    #[test]
    fn name_survives_allocator_change() {
        let budget = Budgeted::new(8);
        let table: HashTable<'_, u8, _> = TableBuilder::new()
            .name("first")
            .allocator(&budget)
            .name("second")
            .build();
        assert_eq!(table.name(), Some("second"));
        assert_eq!(table.allocator().max_slots(), 8);
    }
}
