//! Slot records and lookup diagnostics.

use core::fmt;

/// A stored key/value pair. `probes` counts the slots (or bucket nodes)
/// examined to place it, including the one it landed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
    probes: usize,
}

impl Entry {
    pub(crate) fn new(key: String, value: String) -> Self {
        Entry {
            key,
            value,
            probes: 1,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn probes(&self) -> usize {
        self.probes
    }

    pub(crate) fn set_probes(&mut self, probes: usize) {
        self.probes = probes;
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.key, self.value)
    }
}

/// Outcome of a diagnostic lookup: the value if found and how many
/// slots or nodes the walk examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probes<'a> {
    pub value: Option<&'a str>,
    pub probes: usize,
}

impl Probes<'_> {
    pub fn found(&self) -> bool {
        self.value.is_some()
    }
}
