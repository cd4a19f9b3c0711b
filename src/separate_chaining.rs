//! SeparateChainingHashTable: one insertion-ordered bucket per slot.
//!
//! Insertion never resizes. Capacity moves only through explicit
//! `enlarge` / `shrink` calls, which step the prime sequence and rebuild
//! every bucket from scratch.

use crate::bucket::Bucket;
use crate::entry::{Entry, Probes};
use crate::error::TableError;
use crate::hash::home_index;
use crate::primes::PrimeSequence;
use crate::table::{check_put_args, HashTable};
use core::fmt;
use log::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct SeparateChainingHashTable {
    buckets: Vec<Bucket>,
    live: usize,
    primes: PrimeSequence,
}

impl SeparateChainingHashTable {
    pub fn new() -> Self {
        Self::with_primes(PrimeSequence::new())
    }

    pub fn with_primes(mut primes: PrimeSequence) -> Self {
        primes.reset();
        Self {
            buckets: empty_buckets(primes.current()),
            live: 0,
            primes,
        }
    }

    /// Home bucket of `key` at the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        home_index(key, self.buckets.len())
    }

    pub fn bucket(&self, idx: usize) -> Option<&Bucket> {
        self.buckets.get(idx)
    }

    pub fn probe(&self, key: &str) -> Probes<'_> {
        if key.is_empty() {
            return Probes {
                value: None,
                probes: 0,
            };
        }
        self.buckets[self.hash(key)].probe(key)
    }

    /// Live records, bucket by bucket, each bucket front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets.iter().flat_map(Bucket::iter)
    }

    /// Step to the next prime and rehash every record into it.
    pub fn enlarge(&mut self) -> Result<usize, TableError> {
        let from = self.buckets.len();
        let to = self.primes.next().inspect_err(|e| {
            warn!("separate chaining: cannot enlarge beyond {from}: {e}");
        })?;
        self.rebuild(to);
        debug!("separate chaining: enlarged {from} -> {to} ({} records)", self.live);
        Ok(to)
    }

    /// Step back one prime (holding at the first) and rehash every record.
    pub fn shrink(&mut self) -> usize {
        let from = self.buckets.len();
        let to = self.primes.previous();
        self.rebuild(to);
        debug!("separate chaining: shrunk {from} -> {to} ({} records)", self.live);
        to
    }

    fn rebuild(&mut self, capacity: usize) {
        let old = core::mem::replace(&mut self.buckets, empty_buckets(capacity));
        self.live = 0;
        for entry in old.into_iter().flat_map(Bucket::into_entries) {
            self.append(entry);
        }
    }

    fn append(&mut self, entry: Entry) {
        let idx = self.hash(entry.key());
        self.buckets[idx].push_back(entry);
        self.live += 1;
    }
}

fn empty_buckets(capacity: usize) -> Vec<Bucket> {
    (0..capacity).map(|_| Bucket::new()).collect()
}

impl Default for SeparateChainingHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable for SeparateChainingHashTable {
    fn put(&mut self, key: &str, value: &str) -> Result<String, TableError> {
        check_put_args(key, value)?;
        trace!("separate chaining: put {key:?} -> {value:?}");
        self.append(Entry::new(key.to_string(), value.to_string()));
        Ok(value.to_string())
    }

    fn get(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.buckets[self.hash(key)].find(key).map(Entry::value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        let idx = self.hash(key);
        let removed = self.buckets[idx].remove_by_key(key)?;
        self.live -= 1;
        trace!("separate chaining: removed {key:?} from bucket {idx}");
        Some(removed.into_value())
    }

    fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.buckets[self.hash(key)].contains_key(key)
    }

    fn contains_value(&self, value: &str) -> bool {
        !value.is_empty() && self.buckets.iter().any(|b| b.contains_value(value))
    }

    fn len(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

impl fmt::Display for SeparateChainingHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "separate chaining, capacity {}, size {}", self.capacity(), self.live)?;
        for (i, b) in self.buckets.iter().enumerate() {
            write!(f, "{i}:")?;
            for e in b {
                write!(f, " [{e}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
