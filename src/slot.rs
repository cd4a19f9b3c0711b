//! Open-addressing slot states.

use crate::entry::Entry;
use core::fmt;

/// One cell of an open-addressing table.
///
/// `Empty` terminates every probe walk. `Tombstone` marks a soft-deleted
/// record: it keeps the walk going and counts toward the load factor, but
/// never matches a key or value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Entry),
}

impl Slot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    #[inline]
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    /// Occupied with exactly this key.
    #[inline]
    pub(crate) fn holds_key(&self, key: &str) -> bool {
        matches!(self, Slot::Occupied(e) if e.key() == key)
    }

    pub(crate) fn take(&mut self) -> Slot {
        core::mem::take(self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.write_str("null"),
            Slot::Tombstone => f.write_str("TOMBSTONE"),
            Slot::Occupied(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: only occupied slots match keys; tombstones never do.
    #[test]
    fn tombstone_never_matches() {
        let occ = Slot::Occupied(Entry::new("k".into(), "v".into()));
        assert!(occ.holds_key("k"));
        assert!(!occ.holds_key("x"));
        assert!(!Slot::Tombstone.holds_key("k"));
        assert!(!Slot::Empty.holds_key(""));
        assert!(Slot::Tombstone.entry().is_none());
    }

    #[test]
    fn take_leaves_empty() {
        let mut s = Slot::Occupied(Entry::new("k".into(), "v".into()));
        let old = s.take();
        assert!(s.is_empty());
        assert_eq!(old.entry().map(|e| e.value()), Some("v"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Slot::Empty.to_string(), "null");
        assert_eq!(Slot::Tombstone.to_string(), "TOMBSTONE");
        let occ = Slot::Occupied(Entry::new("Mary".into(), "888".into()));
        assert_eq!(occ.to_string(), "Mary : 888");
    }
}
