//! String hashing and home-slot computation.
//!
//! Placement must be reproducible across runs and machines, so the crate
//! does not use a randomly seeded `BuildHasher`. Keys are hashed with the
//! classic 31-multiplier polynomial over UTF-16 code units in wrapping
//! 32-bit arithmetic, and the sign bit is masked before reduction.
//! Ordered probing compares keys over the same code units.

use core::cmp::Ordering;

/// Polynomial string hash: `s[0]*31^(n-1) + ... + s[n-1]`, wrapping at 32 bits.
pub fn string_hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Home slot of `key` in a table of `capacity` slots.
#[inline]
pub fn home_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    ((string_hash(key) & 0x7fff_ffff) as usize) % capacity
}

/// Lexicographic order over UTF-16 code units. Differs from `str`'s byte
/// order only when an astral character meets one in U+E000..=U+FFFF.
#[inline]
pub fn key_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("Hello"), 69609650);
        assert_eq!(string_hash("Arnold"), 1969563338);
    }

    /// Invariant: a hash with the sign bit set still maps into range.
    #[test]
    fn negative_hash_is_masked() {
        assert_eq!(string_hash("polygenelubricants"), i32::MIN);
        assert_eq!(home_index("polygenelubricants", 7), 0);
        for cap in [7, 13, 23] {
            assert!(home_index("polygenelubricants", cap) < cap);
        }
    }

    #[test]
    fn reference_names_at_capacity_seven() {
        assert_eq!(home_index("Arnold", 7), 1);
        assert_eq!(home_index("Tiffany", 7), 4);
        assert_eq!(home_index("Jessie", 7), 1);
        assert_eq!(home_index("Mary", 7), 6);
    }

    /// Invariant: hashing runs over UTF-16 code units, so astral characters
    /// contribute two units.
    #[test]
    fn utf16_code_units() {
        let s = "\u{1F600}";
        let units: Vec<u16> = s.encode_utf16().collect();
        assert_eq!(units.len(), 2);
        let expected = (units[0] as i32)
            .wrapping_mul(31)
            .wrapping_add(units[1] as i32);
        assert_eq!(string_hash(s), expected);
    }

    /// Invariant: a surrogate pair sorts below U+E000..=U+FFFF, unlike UTF-8.
    #[test]
    fn key_order_follows_code_units() {
        let astral = "\u{1F600}";
        let halfwidth = "\u{FF66}";
        assert!(halfwidth < astral);
        assert_eq!(key_order(astral, halfwidth), Ordering::Less);
        assert_eq!(key_order("Carl", "Charles"), "Carl".cmp("Charles"));
        assert_eq!(key_order("k", "k"), Ordering::Equal);
        assert_eq!(key_order("", "a"), Ordering::Less);
    }
}
