pub(crate) mod error;
pub(crate) mod fnv;

#[cfg(test)]
pub(crate) mod test_utils;

/// The load factor above which a table grows (or purges its tombstones) before
/// inserting a new key.
pub(crate) const MAX_LOAD_FACTOR: f64 = 0.75;

/// The capacity of the first backing array, and the smallest capacity a grown
/// table can have.
pub(crate) const MIN_CAPACITY: usize = 8;

/// Returns `true` if holding `used` non-empty slots in a table of `capacity`
/// slots would exceed the maximum load factor.
///
/// Compared in floating point so that small capacities are not biased by
/// integer truncation of `capacity * 0.75`.
#[inline]
pub(crate) fn exceeds_max_load(used: usize, capacity: usize) -> bool {
    used as f64 > capacity as f64 * MAX_LOAD_FACTOR
}

/// Returns `true` if `used` live entries fill at most half of what the maximum
/// load factor allows in a table of `capacity` slots.
///
/// A table only purges its tombstones at the same capacity when this holds, so
/// every purge reclaims at least as many slots as it keeps.
#[inline]
pub(crate) fn within_half_max_load(used: usize, capacity: usize) -> bool {
    used as f64 <= capacity as f64 * MAX_LOAD_FACTOR / 2.0
}

/// Returns the capacity a table of `capacity` slots grows to: `MIN_CAPACITY`
/// for an unallocated (or too small) table, double the capacity otherwise.
/// `None` when doubling overflows.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity < MIN_CAPACITY {
        Some(MIN_CAPACITY)
    } else {
        capacity.checked_mul(2)
    }
}
