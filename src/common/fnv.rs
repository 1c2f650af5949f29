//! 32-bit FNV-1a, the hash function used to place keys in a table.

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// Hashes `bytes` with 32-bit FNV-1a. Deterministic and unseeded, so a key
/// always lands on the same probe sequence for a given capacity.
#[inline]
pub(crate) fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::fnv1a;

    // Test vectors from the reference FNV distribution.
    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn multiplication_wraps() {
        // Long inputs overflow many times over; this must not panic in debug
        // builds.
        let bytes = vec![0xff; 4096];
        assert_eq!(fnv1a(&bytes), fnv1a(&bytes));
    }
}
