mod builder;
mod slot;
mod slots;

pub use builder::TableBuilder;

use self::{
    slot::Slot,
    slots::{find_slot, RehashOp},
};
use crate::{
    alloc::{Global, SlotAllocator},
    AllocError,
};

use std::{fmt, mem};

/// A hash table mapping byte-string keys to values of type `V`, using open
/// addressing with linear probing.
///
/// All entries live directly in one contiguous array of slots. A key is placed
/// at `hash(key) mod capacity` (32-bit FNV-1a), and when that slot is taken the
/// next slots are tried in order, wrapping around at the end of the array.
///
/// Keys are _borrowed_: the table stores `&'k [u8]` views into bytes owned by
/// the caller, so the key storage has to outlive the table. Values are owned by
/// the table and dropped when they are overwritten, deleted, or when the table
/// itself is dropped.
///
/// # Examples
///
///```rust
/// use linprobe::HashTable;
///
/// let keys = (0..64).map(|n| format!("key {n}")).collect::<Vec<_>>();
///
/// let mut table = HashTable::new();
///
/// // Insert 64 entries.
/// for (n, key) in keys.iter().enumerate() {
///     assert_eq!(table.put(key.as_bytes(), n), Ok(true));
/// }
///
/// // Delete every 4th entry.
/// for key in keys.iter().step_by(4) {
///     assert!(table.delete(key.as_bytes()));
/// }
///
/// // Verify the result.
/// for (n, key) in keys.iter().enumerate() {
///     if n % 4 == 0 {
///         assert_eq!(table.get(key.as_bytes()), None);
///     } else {
///         assert_eq!(table.get(key.as_bytes()), Some(&n));
///     }
/// }
/// assert_eq!(table.len(), 48);
/// ```
///
/// # Growth and Deletion
///
/// A new table does not allocate. The first `put` allocates 8 slots, and
/// before any `put` that would take the number of entries above 75% of the
/// capacity, the table moves every entry into a new array of twice the size.
/// Capacity never shrinks.
///
/// Deleting an entry leaves a _tombstone_ in its slot so that probe sequences
/// running through it stay intact. Tombstones are reused by later insertions
/// and are discarded whenever the entries are moved to a new array. If entries
/// and tombstones together would exceed the load factor, the table has to be
/// rehashed. When the entries alone fill at most half of the load limit, it is
/// rehashed at its current capacity to clear the tombstones out. Otherwise it
/// grows.
///
/// # Allocation
///
/// Backing arrays come from a [`SlotAllocator`][slot-allocator], the global
/// allocator by default. See [`TableBuilder::allocator`][builder-allocator].
/// When the allocator refuses a request, `put` returns an
/// [`AllocError`][alloc-error] and the table is left as it was.
///
/// [slot-allocator]: ./trait.SlotAllocator.html
/// [builder-allocator]: ./struct.TableBuilder.html#method.allocator
/// [alloc-error]: ./struct.AllocError.html
///
/// # Thread Safety
///
/// `HashTable` does no internal synchronization. To share one between threads,
/// guard it with a lock such as `std::sync::Mutex`.
pub struct HashTable<'k, V, A: SlotAllocator = Global> {
    name: Option<String>,
    slots: Box<[Slot<'k, V>]>,
    len: usize,
    tombstones: usize,
    allocator: A,
}

impl<V> HashTable<'_, V, Global> {
    /// Constructs a new, empty `HashTable<V>` backed by the global allocator.
    ///
    /// To set a name or use another allocator, use the
    /// [`TableBuilder`][builder-struct].
    ///
    /// [builder-struct]: ./struct.TableBuilder.html
    pub fn new() -> Self {
        Self::with_everything(None, Global)
    }

    /// Returns a [`TableBuilder`][builder-struct], which can build a `HashTable`
    /// with various configuration knobs.
    ///
    /// [builder-struct]: ./struct.TableBuilder.html
    pub fn builder() -> TableBuilder<V, Global> {
        TableBuilder::default()
    }
}

impl<V> Default for HashTable<'_, V, Global> {
    fn default() -> Self {
        Self::new()
    }
}

//
// public
//
impl<'k, V, A: SlotAllocator> HashTable<'k, V, A> {
    pub(crate) fn with_everything(name: Option<String>, allocator: A) -> Self {
        Self {
            name,
            slots: Box::default(),
            len: 0,
            tombstones: 0,
            allocator,
        }
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.find(key).and_then(|index| self.slots[index].value())
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let index = self.find(key)?;
        self.slots[index].value_mut()
    }

    /// Returns `true` if the table holds a value for `key`.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair into the table.
    ///
    /// Returns `true` if the key was not present, and `false` if an existing
    /// value was replaced. The replaced value is dropped.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocError`] if the table had to grow and no larger backing
    /// array could be allocated. The table is unchanged in that case and `value`
    /// is dropped.
    pub fn put(&mut self, key: &'k [u8], value: V) -> Result<bool, AllocError> {
        let capacity = self.capacity();
        let op = RehashOp::new(capacity, self.len, self.tombstones);
        if op != RehashOp::Skip {
            let new_capacity = match op.new_capacity(capacity) {
                Some(new_capacity) => new_capacity,
                None => {
                    let error = AllocError::capacity_overflow();
                    self.log_alloc_failure(&error);
                    return Err(error);
                }
            };
            self.resize(new_capacity)?;
        }

        let index = find_slot(&self.slots, key);
        let slot = &mut self.slots[index];
        let is_new = match slot {
            Slot::Empty => true,
            Slot::Tombstone => {
                self.tombstones -= 1;
                true
            }
            Slot::Occupied { .. } => false,
        };
        *slot = Slot::Occupied { key, value };

        if is_new {
            self.len += 1;
        }
        Ok(is_new)
    }

    /// Deletes the entry for `key`. Returns `true` if there was one.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        self.remove(key).is_some()
    }

    /// Deletes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let index = self.find(key)?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                self.tombstones += 1;
                Some(value)
            }
            // `find` only returns occupied slots.
            _ => unreachable!(),
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array. `0` until the first
    /// `put`, and a power of two of at least 8 after it.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the name of this table.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the allocation provider of this table.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }
}

//
// private
//
impl<'k, V, A: SlotAllocator> HashTable<'k, V, A> {
    // Returns the index of the occupied slot holding `key`.
    #[inline]
    fn find(&self, key: &[u8]) -> Option<usize> {
        // An empty table may have no backing array at all.
        if self.len == 0 {
            return None;
        }
        let index = find_slot(&self.slots, key);
        self.slots[index].is_occupied().then_some(index)
    }

    /// Moves every entry into a new array of `new_capacity` slots, dropping the
    /// tombstones. Nothing is touched if the allocation fails.
    fn resize(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let new_slots = match self.allocator.allocate_slots(new_capacity) {
            Ok(slots) => slots,
            Err(error) => {
                self.log_alloc_failure(&error);
                return Err(error);
            }
        };

        let mut old_slots = mem::replace(&mut self.slots, new_slots);
        let purged = self.tombstones;
        let mut len = 0;

        for slot in old_slots.iter_mut() {
            if let Slot::Occupied { key, value } = mem::take(slot) {
                let index = find_slot(&self.slots, key);
                self.slots[index] = Slot::Occupied { key, value };
                len += 1;
            }
        }

        let old_capacity = old_slots.len();
        self.allocator.release_slots(old_slots);
        self.len = len;
        self.tombstones = 0;

        self.log_resize(old_capacity, purged);
        Ok(())
    }

    #[cfg(feature = "logging")]
    fn log_resize(&self, old_capacity: usize, purged: usize) {
        let tn = self.log_prefix();
        let capacity = self.capacity();
        if old_capacity == capacity {
            log::debug!("{tn}Purged {purged} tombstones, {capacity} slots, {} entries", self.len);
        } else {
            log::debug!(
                "{tn}Grew from {old_capacity} to {capacity} slots, {} entries, purged {purged} tombstones",
                self.len
            );
        }
    }

    #[cfg(not(feature = "logging"))]
    #[inline]
    fn log_resize(&self, _old_capacity: usize, _purged: usize) {}

    #[cfg(feature = "logging")]
    fn log_alloc_failure(&self, error: &AllocError) {
        let tn = self.log_prefix();
        log::warn!("{tn}Could not resize from {} slots: {error}", self.capacity());
    }

    #[cfg(not(feature = "logging"))]
    #[inline]
    fn log_alloc_failure(&self, _error: &AllocError) {}

    #[cfg(feature = "logging")]
    fn log_prefix(&self) -> String {
        self.name
            .as_deref()
            .map(|name| format!("[{name}] "))
            .unwrap_or_default()
    }
}

impl<V, A: SlotAllocator> Drop for HashTable<'_, V, A> {
    fn drop(&mut self) {
        let slots = mem::take(&mut self.slots);
        self.allocator.release_slots(slots);
    }
}

impl<V, A: SlotAllocator> fmt::Debug for HashTable<'_, V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("name", &self.name)
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("tombstones", &self.tombstones)
            .finish()
    }
}
