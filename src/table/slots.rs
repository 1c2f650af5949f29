use super::slot::Slot;
use crate::common::{self, fnv::fnv1a};

/// The linear probe sequence of a key: starts at `hash mod capacity` and visits
/// every slot once, wrapping around at the end of the array.
struct Probe {
    mask: usize,
    index: usize,
    remaining: usize,
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self.index;
        self.index = (index + 1) & self.mask;
        Some(index)
    }
}

fn probe(capacity: usize, hash: u32) -> Probe {
    // `capacity - 1` is a valid mask only for powers of two. This also rules out
    // probing an unallocated table, as 0 is not a power of two.
    debug_assert!(capacity.is_power_of_two());
    let mask = capacity - 1;
    Probe {
        mask,
        index: hash as usize & mask,
        remaining: capacity,
    }
}

/// Returns the index of the slot `key` lives in, or the slot it should be
/// inserted into when absent.
///
/// The search stops at the occupied slot holding `key`, or at the first empty
/// slot. In the latter case the first tombstone passed on the way is returned
/// instead (if any) so that insertion reuses it.
pub(crate) fn find_slot<V>(slots: &[Slot<'_, V>], key: &[u8]) -> usize {
    let mut first_tombstone = None;

    for index in probe(slots.len(), fnv1a(key)) {
        match &slots[index] {
            Slot::Empty => return first_tombstone.unwrap_or(index),
            Slot::Tombstone => {
                first_tombstone.get_or_insert(index);
            }
            Slot::Occupied { key: this_key, .. } if *this_key == key => return index,
            Slot::Occupied { .. } => {}
        }
    }

    // The load factor cap keeps at least one slot empty, so a full lap only
    // happens if that invariant was broken.
    first_tombstone.unwrap_or_else(|| unreachable!("probed a full table for {key:?}"))
}

/// What a `put` has to do to the backing array before inserting a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RehashOp {
    /// Live entries would exceed the load factor, or live entries plus
    /// tombstones would and the live entries alone fill more than half of it.
    /// Grow to the next capacity.
    Expand,
    /// Live entries plus tombstones would exceed the load factor, but the live
    /// entries fill at most half of it. Rehash at the same capacity to purge
    /// the tombstones.
    Purge,
    Skip,
}

impl RehashOp {
    pub(crate) fn new(capacity: usize, len: usize, tombstones: usize) -> Self {
        if common::exceeds_max_load(len + 1, capacity) {
            Self::Expand
        } else if common::exceeds_max_load(len + tombstones + 1, capacity) {
            // A purge has to free at least as many slots as it keeps.
            if common::within_half_max_load(len + 1, capacity) {
                Self::Purge
            } else {
                Self::Expand
            }
        } else {
            Self::Skip
        }
    }

    /// Returns the capacity to rehash into, or `None` if doubling overflows.
    pub(crate) fn new_capacity(self, capacity: usize) -> Option<usize> {
        match self {
            Self::Expand => common::grown_capacity(capacity),
            Self::Purge => Some(capacity),
            Self::Skip => unreachable!(),
        }
    }
}
