//! Linear probing: every collision moves one slot over.

use crate::open_addressing::{OpenAddressingHashTable, Probing, Repair};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbing;

impl Probing for LinearProbing {
    const NAME: &'static str = "linear probing";
    const REPAIR: Repair = Repair::Run;

    #[inline]
    fn offset(i: usize, capacity: usize) -> usize {
        i % capacity
    }
}

pub type LinearProbingHashTable = OpenAddressingHashTable<LinearProbing>;
