//! prime-probe: string-keyed hash tables over prime capacities, one per
//! collision-resolution strategy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: four tables with one external contract (`HashTable`) so the
//!   strategies can be compared and swapped freely.
//! - Layers:
//!   - PrimeSequence: fixed schedule of prime capacities with a cursor
//!     (`current`, `next`, `previous`).
//!   - SeparateChainingHashTable: one insertion-ordered `Bucket` per slot;
//!     resized only through explicit `enlarge` / `shrink`.
//!   - OpenAddressingHashTable<P>: slot array of `Slot::{Empty, Tombstone,
//!     Occupied}`, live and tombstone counters, growth on load factor.
//!     `P: Probing` supplies the probe offset, run ordering and the
//!     hard-delete repair policy.
//!   - LinearProbing, OrderedLinearProbing, QuadraticProbing: the three
//!     strategies, exposed through type aliases.
//!
//! Constraints
//! - Single-threaded and synchronous; mutation takes `&mut self`.
//! - Capacity is always the sequence's current prime.
//! - Open addressing grows at the top of `put` when
//!   `(live + tombstones) / capacity` already exceeds the threshold
//!   (0.5 by default). Growth is synchronous and either completes or
//!   leaves the table untouched.
//! - Deletion mode (hard or soft) is fixed at construction.
//!
//! Keys and values
//! - Both are `&str` on the way in and owned `String`s inside.
//! - The empty string plays the role of an absent argument: `put` rejects
//!   it with `InvalidArgument`, lookups with it always miss.
//! - Duplicate keys are not merged. A second `put` of a present key adds
//!   a homonym next to the first record; `remove` takes one at a time.
//!
//! Hashing
//! - Home slot is `(string_hash(key) & 0x7fffffff) % capacity` where
//!   `string_hash` is the 31-multiplier polynomial over UTF-16 code units.
//!   Placement is therefore identical on every run and platform.
//!
//! Deletion
//! - Soft: the slot becomes a tombstone. It keeps probe walks going,
//!   counts toward the load factor and is dropped on the next growth.
//! - Hard, linear and ordered: the slot is emptied and the contiguous run
//!   behind it is lifted and placed again.
//! - Hard, quadratic: every survivor is placed again into a fresh array
//!   of the same capacity.
//!   If that fails (possible only above the default threshold) the array
//!   is left as it was and the emptied slot becomes a tombstone.
//!
//! Errors
//! - `InvalidArgument`, `ExhaustedSequence`, `ProbeSequenceExhausted` and
//!   `InvalidConfig`. Misses and duplicates are ordinary return values.
//!   `ExhaustedSequence` is expected under stress insertion and leaves the
//!   table usable.
//!
//! Logging
//! - Through the `log` facade: `trace` per insert/remove, `debug` per
//!   resize or repair, `warn` when growth is refused. No logger is
//!   installed by the library.
//!
//! Notes and non-goals
//! - No generic key/value types, no persistence, no iteration order
//!   beyond slot order (open addressing) or bucket order (chaining).
//! - `Display` renders a slot-by-slot dump for debugging; its format is
//!   not a contract.

pub mod bucket;
pub mod config;
pub mod entry;
pub mod error;
pub mod hash;
pub mod linear_probing;
pub mod open_addressing;
mod open_addressing_proptest;
pub mod ordered_linear_probing;
pub mod primes;
pub mod quadratic_probing;
pub mod separate_chaining;
pub mod slot;
pub mod table;

// Public surface
pub use bucket::Bucket;
pub use config::{DeletionMode, TableConfig, DEFAULT_LOAD_THRESHOLD};
pub use entry::{Entry, Probes};
pub use error::TableError;
pub use linear_probing::{LinearProbing, LinearProbingHashTable};
pub use open_addressing::{OpenAddressingHashTable, Probing, Repair};
pub use ordered_linear_probing::{OrderedLinearProbing, OrderedLinearProbingHashTable};
pub use primes::PrimeSequence;
pub use quadratic_probing::{QuadraticProbing, QuadraticProbingHashTable};
pub use separate_chaining::SeparateChainingHashTable;
pub use slot::Slot;
pub use table::HashTable;
