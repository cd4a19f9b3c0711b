//! Ordered linear probing: linear probing that sorts records by key along
//! their probe paths.
//!
//! While walking toward an empty slot, the record being placed swaps with
//! any resident whose key is greater or equal (compared over UTF-16 code
//! units, see `hash::key_order`), and the walk continues with
//! the displaced resident. Afterwards every key between a record's home
//! slot and the record itself is less than or equal to its key, so a run
//! read from any home slot is ascending up to the records that live there.
//! Lookups still stop only at an empty slot or after a full cycle; the
//! ordering is not used to cut misses short.

use crate::open_addressing::{OpenAddressingHashTable, Probing, Repair};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedLinearProbing;

impl Probing for OrderedLinearProbing {
    const NAME: &'static str = "ordered linear probing";
    const ORDERED_RUNS: bool = true;
    const REPAIR: Repair = Repair::Run;

    #[inline]
    fn offset(i: usize, capacity: usize) -> usize {
        i % capacity
    }
}

pub type OrderedLinearProbingHashTable = OpenAddressingHashTable<OrderedLinearProbing>;
