//! OpenAddressingHashTable: one engine shared by every probing strategy.
//!
//! The engine owns the slot array, the live/tombstone counters, the prime
//! sequence and the growth policy. A strategy (`Probing`) contributes only
//! the probe offset, whether occupied runs are kept sorted by key, and how
//! a hard delete repairs the probe chains behind the emptied slot.
//!
//! Placement and lookup are free functions over a slot slice so growth can
//! build the new array off to the side and roll back if a record cannot be
//! placed.

use crate::config::{DeletionMode, TableConfig};
use crate::entry::{Entry, Probes};
use crate::error::TableError;
use crate::hash::{home_index, key_order};
use crate::primes::PrimeSequence;
use crate::slot::Slot;
use crate::table::{check_put_args, HashTable};
use core::fmt;
use core::marker::PhantomData;
use log::{debug, trace, warn};

/// How a hard delete keeps later records of the same probe chain reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// Lift the contiguous run after the emptied slot and place it again.
    Run,
    /// Place every remaining record again into a fresh array of the same
    /// capacity.
    Rebuild,
}

/// A collision-resolution policy plugged into `OpenAddressingHashTable`.
pub trait Probing {
    const NAME: &'static str;

    /// Keep each occupied run ascending by key. Requires a unit stride.
    const ORDERED_RUNS: bool = false;

    const REPAIR: Repair;

    /// Distance from the home slot of the `i`-th probe, reduced modulo
    /// `capacity`. `offset(0, _)` must be 0.
    fn offset(i: usize, capacity: usize) -> usize;
}

#[inline]
fn probe_at<P: Probing>(home: usize, i: usize, capacity: usize) -> usize {
    (home + P::offset(i, capacity)) % capacity
}

/// Walk the probe sequence of `key`. Returns the matching slot, if any, and
/// the number of slots examined. Stops at the first empty slot or after a
/// full cycle; tombstones are stepped over.
fn find_in<P: Probing>(slots: &[Slot], key: &str) -> (Option<usize>, usize) {
    let capacity = slots.len();
    let home = home_index(key, capacity);
    for i in 0..capacity {
        let idx = probe_at::<P>(home, i, capacity);
        match &slots[idx] {
            Slot::Empty => return (None, i + 1),
            s if s.holds_key(key) => return (Some(idx), i + 1),
            _ => {}
        }
    }
    (None, capacity)
}

/// Place `entry` into `slots`, which currently has `occupied` non-empty
/// slots. On failure the entry is handed back and `slots` is unchanged.
fn place_into<P: Probing>(
    slots: &mut [Slot],
    occupied: usize,
    entry: Entry,
) -> Result<usize, (Entry, TableError)> {
    let capacity = slots.len();
    if occupied >= capacity {
        return Err((entry, TableError::ProbeSequenceExhausted { capacity }));
    }
    if P::ORDERED_RUNS {
        Ok(place_ordered(slots, entry))
    } else {
        place_first_empty::<P>(slots, entry)
    }
}

fn place_first_empty<P: Probing>(
    slots: &mut [Slot],
    mut entry: Entry,
) -> Result<usize, (Entry, TableError)> {
    let capacity = slots.len();
    let home = home_index(entry.key(), capacity);
    for i in 0..capacity {
        let idx = probe_at::<P>(home, i, capacity);
        if slots[idx].is_empty() {
            entry.set_probes(i + 1);
            slots[idx] = Slot::Occupied(entry);
            return Ok(idx);
        }
    }
    Err((entry, TableError::ProbeSequenceExhausted { capacity }))
}

/// Insertion sort by swap along a unit-stride run. The caller guarantees at
/// least one empty slot, which a unit stride always reaches.
fn place_ordered(slots: &mut [Slot], entry: Entry) -> usize {
    let capacity = slots.len();
    let placed_home = home_index(entry.key(), capacity);
    let displacement = |idx: usize, home: usize| (idx + capacity - home) % capacity + 1;

    let mut carried = entry;
    let mut idx = placed_home;
    let mut landed = None;
    loop {
        if slots[idx].is_empty() {
            let home = home_index(carried.key(), capacity);
            carried.set_probes(displacement(idx, home));
            slots[idx] = Slot::Occupied(carried);
            return landed.unwrap_or(idx);
        }
        if let Slot::Occupied(resident) = &mut slots[idx] {
            if key_order(resident.key(), carried.key()).is_ge() {
                let home = home_index(carried.key(), capacity);
                carried.set_probes(displacement(idx, home));
                core::mem::swap(resident, &mut carried);
                landed.get_or_insert(idx);
            }
        }
        idx = (idx + 1) % capacity;
    }
}

pub struct OpenAddressingHashTable<P> {
    slots: Vec<Slot>,
    live: usize,
    tombstones: usize,
    primes: PrimeSequence,
    deletion: DeletionMode,
    threshold: f64,
    _probing: PhantomData<P>,
}

impl<P: Probing> OpenAddressingHashTable<P> {
    /// Hard-deletion table at the first prime of the default schedule.
    pub fn new() -> Self {
        Self::with_config(TableConfig::new())
    }

    pub fn with_deletion(mode: DeletionMode) -> Self {
        Self::with_config(TableConfig::new().deletion(mode))
    }

    pub fn with_config(config: TableConfig) -> Self {
        let primes = config.prime_sequence().clone();
        Self {
            slots: vec![Slot::Empty; primes.current()],
            live: 0,
            tombstones: 0,
            primes,
            deletion: config.deletion_mode(),
            threshold: config.threshold(),
            _probing: PhantomData,
        }
    }

    /// Home slot of `key` at the current capacity.
    pub fn hash(&self, key: &str) -> usize {
        home_index(key, self.slots.len())
    }

    pub fn slot(&self, idx: usize) -> Option<&Slot> {
        self.slots.get(idx)
    }

    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn deletion_mode(&self) -> DeletionMode {
        self.deletion
    }

    /// `(live + tombstones) / capacity`.
    pub fn load_factor(&self) -> f64 {
        (self.live + self.tombstones) as f64 / self.slots.len() as f64
    }

    /// Live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.slots.iter().filter_map(Slot::entry)
    }

    pub fn probe(&self, key: &str) -> Probes<'_> {
        if key.is_empty() {
            return Probes {
                value: None,
                probes: 0,
            };
        }
        let (found, probes) = find_in::<P>(&self.slots, key);
        Probes {
            value: found.and_then(|idx| self.slots[idx].entry()).map(Entry::value),
            probes,
        }
    }

    fn locate(&self, key: &str) -> Option<usize> {
        if key.is_empty() {
            return None;
        }
        find_in::<P>(&self.slots, key).0
    }

    fn place(&mut self, entry: Entry) -> Result<usize, (Entry, TableError)> {
        let idx = place_into::<P>(&mut self.slots, self.live + self.tombstones, entry)?;
        self.live += 1;
        Ok(idx)
    }

    /// Step to the next prime and rehash into it. On any failure the table,
    /// including the sequence cursor, is left as it was.
    fn grow(&mut self) -> Result<(), TableError> {
        let from = self.slots.len();
        let to = self.primes.next().inspect_err(|e| {
            warn!("{}: cannot grow beyond {from}: {e}", P::NAME);
        })?;
        if let Err(e) = self.rehash(to) {
            self.primes.previous();
            return Err(e);
        }
        debug!("{}: grew {from} -> {to} ({} records)", P::NAME, self.live);
        Ok(())
    }

    /// Move every live record into a fresh array of `capacity` slots,
    /// dropping tombstones. Records are taken in slot order. If one cannot
    /// be placed, every record is moved back where it came from.
    ///
    /// Only unordered placement can fail once the count fits, and it never
    /// moves a record after placing it, so `moved` maps records back exactly.
    fn rehash(&mut self, capacity: usize) -> Result<(), TableError> {
        if self.live > capacity {
            return Err(TableError::ProbeSequenceExhausted { capacity });
        }
        let mut fresh = vec![Slot::Empty; capacity];
        // (old slot, new slot, old probe count) per record moved so far.
        let mut moved: Vec<(usize, usize, usize)> = Vec::with_capacity(self.live);
        for from in 0..self.slots.len() {
            match self.slots[from].take() {
                Slot::Occupied(entry) => {
                    let probes = entry.probes();
                    match place_into::<P>(&mut fresh, moved.len(), entry) {
                        Ok(to) => moved.push((from, to, probes)),
                        Err((entry, e)) => {
                            self.slots[from] = Slot::Occupied(entry);
                            for &(from, to, probes) in &moved {
                                if let Slot::Occupied(mut back) = fresh[to].take() {
                                    back.set_probes(probes);
                                    self.slots[from] = Slot::Occupied(back);
                                }
                            }
                            return Err(e);
                        }
                    }
                }
                other => self.slots[from] = other,
            }
        }
        self.slots = fresh;
        self.live = moved.len();
        self.tombstones = 0;
        Ok(())
    }

    /// Empty the slot at `idx` and keep the chains through it reachable.
    /// A rebuild that cannot place every survivor falls back to a tombstone.
    fn hard_remove(&mut self, idx: usize) -> Entry {
        let removed = match self.slots[idx].take() {
            Slot::Occupied(e) => e,
            other => unreachable!("hard_remove on {other:?}"),
        };
        self.live -= 1;
        match P::REPAIR {
            Repair::Run => self.repair_run(idx),
            Repair::Rebuild => {
                let capacity = self.slots.len();
                if let Err(e) = self.rehash(capacity) {
                    // The arrangement is unchanged, so chains through `idx`
                    // still need a walkable slot there.
                    warn!("{}: rebuild after removal failed, leaving a tombstone at {idx}: {e}", P::NAME);
                    self.slots[idx] = Slot::Tombstone;
                    self.tombstones += 1;
                }
            }
        }
        removed
    }

    fn repair_run(&mut self, emptied: usize) {
        let capacity = self.slots.len();
        let mut run = Vec::new();
        let mut idx = (emptied + 1) % capacity;
        while !self.slots[idx].is_empty() {
            match self.slots[idx].take() {
                Slot::Occupied(e) => {
                    self.live -= 1;
                    run.push(e);
                }
                Slot::Tombstone => self.tombstones -= 1,
                Slot::Empty => {}
            }
            idx = (idx + 1) % capacity;
        }
        debug!("{}: re-placing run of {} after slot {emptied}", P::NAME, run.len());
        for entry in run {
            // The run's own slots are free again and a unit stride reaches them.
            self.place(entry)
                .expect("lifted run fits back into the slots it vacated");
        }
    }
}

impl<P: Probing> Default for OpenAddressingHashTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for OpenAddressingHashTable<P> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            live: self.live,
            tombstones: self.tombstones,
            primes: self.primes.clone(),
            deletion: self.deletion,
            threshold: self.threshold,
            _probing: PhantomData,
        }
    }
}

impl<P: Probing> fmt::Debug for OpenAddressingHashTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(P::NAME)
            .field("capacity", &self.slots.len())
            .field("live", &self.live)
            .field("tombstones", &self.tombstones)
            .field("deletion", &self.deletion)
            .finish()
    }
}

impl<P: Probing> HashTable for OpenAddressingHashTable<P> {
    fn put(&mut self, key: &str, value: &str) -> Result<String, TableError> {
        check_put_args(key, value)?;
        trace!("{}: put {key:?} -> {value:?}", P::NAME);
        if self.load_factor() > self.threshold {
            self.grow()?;
        }
        self.place(Entry::new(key.to_string(), value.to_string()))
            .map_err(|(_, e)| e)?;
        Ok(value.to_string())
    }

    fn get(&self, key: &str) -> Option<&str> {
        let idx = self.locate(key)?;
        self.slots[idx].entry().map(Entry::value)
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.locate(key)?;
        trace!("{}: remove {key:?} at slot {idx}", P::NAME);
        let removed = match self.deletion {
            DeletionMode::Soft => match core::mem::replace(&mut self.slots[idx], Slot::Tombstone) {
                Slot::Occupied(e) => {
                    self.live -= 1;
                    self.tombstones += 1;
                    e
                }
                other => unreachable!("located slot held {other:?}"),
            },
            DeletionMode::Hard => self.hard_remove(idx),
        };
        Some(removed.into_value())
    }

    fn contains_value(&self, value: &str) -> bool {
        !value.is_empty() && self.iter().any(|e| e.value() == value)
    }

    fn len(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<P: Probing> fmt::Display for OpenAddressingHashTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}, capacity {}, size {}, tombstones {}, {:?} deletion",
            P::NAME,
            self.slots.len(),
            self.live,
            self.tombstones,
            self.deletion
        )?;
        for (i, s) in self.slots.iter().enumerate() {
            writeln!(f, "{i}: {s}")?;
        }
        Ok(())
    }
}
