//! The contract every collision-resolution strategy satisfies.

use crate::error::TableError;

/// String-to-string associative container.
///
/// An empty string stands for an absent key or value: `put` rejects it,
/// and lookups with an empty key always miss.
pub trait HashTable {
    /// Insert `key -> value` and return the stored value. A key already
    /// present is not overwritten; the new record is added next to it.
    fn put(&mut self, key: &str, value: &str) -> Result<String, TableError>;

    fn get(&self, key: &str) -> Option<&str>;

    /// Remove one record with `key` and return its value.
    fn remove(&mut self, key: &str) -> Option<String>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn contains_value(&self, value: &str) -> bool;

    /// Live records only; tombstones are not counted.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the backing array.
    fn capacity(&self) -> usize;
}

pub(crate) fn check_put_args(key: &str, value: &str) -> Result<(), TableError> {
    if key.is_empty() {
        return Err(TableError::InvalidArgument { what: "key" });
    }
    if value.is_empty() {
        return Err(TableError::InvalidArgument { what: "value" });
    }
    Ok(())
}
