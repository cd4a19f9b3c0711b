//! Quadratic probing: the i-th collision jumps `i^2 + i` slots from home.
//!
//! Wider jumps avoid the primary clustering of linear probing at the cost
//! of cache locality. For a prime capacity `p` the offsets `i^2 + i` cover
//! only `(p + 1) / 2` residues and return to 0 at `i = p - 1`, so a walk of
//! `p` probes is exactly one full cycle. Keeping the load factor at or below
//! one half leaves an empty slot among those residues.
//!
//! Hard deletes rebuild the whole array at the current capacity instead of
//! repairing a local run, since quadratic chains are not contiguous.

use crate::open_addressing::{OpenAddressingHashTable, Probing, Repair};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticProbing;

impl Probing for QuadraticProbing {
    const NAME: &'static str = "quadratic probing";
    const REPAIR: Repair = Repair::Rebuild;

    #[inline]
    fn offset(i: usize, capacity: usize) -> usize {
        let i = i as u64;
        ((i * i + i) % capacity as u64) as usize
    }
}

pub type QuadraticProbingHashTable = OpenAddressingHashTable<QuadraticProbing>;
