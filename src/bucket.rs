//! Insertion-ordered record list used as a separate-chaining bucket.

use crate::entry::{Entry, Probes};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a record; its probe count is its 1-based position.
    pub(crate) fn push_back(&mut self, mut entry: Entry) {
        entry.set_probes(self.entries.len() + 1);
        self.entries.push(entry);
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key() == key)
    }

    /// First record with `key`, front to back.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.position(key).map(|i| &self.entries[i])
    }

    /// Nodes examined: the match position, or on a miss the whole list plus
    /// the end-of-list check.
    pub fn probe(&self, key: &str) -> Probes<'_> {
        match self.position(key) {
            Some(i) => Probes {
                value: Some(self.entries[i].value()),
                probes: i + 1,
            },
            None => Probes {
                value: None,
                probes: self.entries.len() + 1,
            },
        }
    }

    /// Remove the first record with `key`. Records behind it move up one
    /// position and their probe counts follow.
    pub(crate) fn remove_by_key(&mut self, key: &str) -> Option<Entry> {
        let i = self.position(key)?;
        let removed = self.entries.remove(i);
        for (pos, e) in self.entries.iter_mut().enumerate().skip(i) {
            e.set_probes(pos + 1);
        }
        Some(removed)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e.value() == value)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
