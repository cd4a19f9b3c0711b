#![cfg(test)]

// Property tests for every table strategy, kept inside the crate so they
// can reach slot-level diagnostics without feature gates.

use crate::config::DeletionMode;
use crate::linear_probing::LinearProbing;
use crate::open_addressing::{OpenAddressingHashTable, Probing};
use crate::ordered_linear_probing::OrderedLinearProbing;
use crate::primes::DEFAULT_SCHEDULE;
use crate::quadratic_probing::QuadraticProbing;
use crate::separate_chaining::SeparateChainingHashTable;
use crate::slot::Slot;
use crate::table::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, String),
    Get(usize),
    Remove(usize),
    Contains(String),
    ContainsValue(String),
    Resize(bool),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{1,4}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), "[0-9]{1,3}").prop_map(|(i, v)| Op::Put(i, v)),
            2 => idx.clone().prop_map(Op::Get),
            3 => idx.clone().prop_map(Op::Remove),
            1 => "[a-z]{0,4}".prop_map(Op::Contains),
            1 => "[0-9]{0,3}".prop_map(Op::ContainsValue),
            1 => any::<bool>().prop_map(Op::Resize),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Model: key -> values still present. Homonyms make `get`/`remove` free to
// pick any present value, so the model checks membership, not identity.
type Model = HashMap<String, Vec<String>>;

fn model_len(model: &Model) -> usize {
    model.values().map(Vec::len).sum()
}

fn take_value(model: &mut Model, key: &str, value: &str) -> bool {
    let Some(values) = model.get_mut(key) else {
        return false;
    };
    let Some(pos) = values.iter().position(|v| v == value) else {
        return false;
    };
    values.swap_remove(pos);
    if values.is_empty() {
        model.remove(key);
    }
    true
}

/// Apply one op to `sut` and `model`. `resize` handles `Op::Resize` for
/// tables that expose explicit resizing.
fn apply<T: HashTable>(
    sut: &mut T,
    model: &mut Model,
    pool: &[String],
    op: Op,
    resize: impl FnOnce(&mut T, bool),
) -> Result<(), TestCaseError> {
    match op {
        Op::Put(i, v) => {
            let k = &pool[i];
            prop_assert_eq!(sut.put(k, &v), Ok(v.clone()));
            model.entry(k.clone()).or_default().push(v);
        }
        Op::Get(i) => {
            let k = &pool[i];
            match sut.get(k) {
                Some(v) => prop_assert!(
                    model.get(k).is_some_and(|vs| vs.iter().any(|x| x == v)),
                    "get({}) returned {} not in model",
                    k,
                    v
                ),
                None => prop_assert!(!model.contains_key(k)),
            }
        }
        Op::Remove(i) => {
            let k = &pool[i];
            match sut.remove(k) {
                Some(v) => prop_assert!(take_value(model, k, &v), "removed {}={} not in model", k, v),
                None => prop_assert!(!model.contains_key(k)),
            }
        }
        Op::Contains(s) => {
            prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
        }
        Op::ContainsValue(s) => {
            let expected = model.values().flatten().any(|v| *v == s);
            prop_assert_eq!(sut.contains_value(&s), expected);
        }
        Op::Resize(up) => resize(sut, up),
    }
    prop_assert_eq!(sut.len(), model_len(model));
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    prop_assert!(DEFAULT_SCHEDULE.contains(&sut.capacity()));
    Ok(())
}

fn check_open_addressing<P: Probing>(
    mode: DeletionMode,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut sut = OpenAddressingHashTable::<P>::with_deletion(mode);
    let mut model = Model::new();
    for op in ops {
        apply(&mut sut, &mut model, pool, op, |_, _| {})?;

        let cap = sut.capacity();
        let tombstones = (0..cap)
            .filter(|&i| sut.slot(i).is_some_and(Slot::is_tombstone))
            .count();
        prop_assert_eq!(sut.tombstones(), tombstones);
        prop_assert_eq!(sut.iter().count(), sut.len());
        if mode == DeletionMode::Hard {
            prop_assert_eq!(tombstones, 0);
        }
        // At most one record is placed after the threshold check passes.
        prop_assert!(2 * (sut.len() + tombstones) <= cap + 2);
        // Every live record is reachable from its home slot.
        for e in sut.iter() {
            prop_assert!(sut.contains_key(e.key()), "{} unreachable\n{}", e.key(), sut);
        }
    }
    // Draining the model through the table empties both.
    let keys: Vec<String> = model.keys().cloned().collect();
    for k in keys {
        while let Some(v) = sut.remove(&k) {
            prop_assert!(take_value(&mut model, &k, &v));
        }
    }
    prop_assert!(model.is_empty());
    prop_assert!(sut.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_linear_hard((pool, ops) in arb_scenario()) {
        check_open_addressing::<LinearProbing>(DeletionMode::Hard, &pool, ops)?;
    }

    #[test]
    fn prop_linear_soft((pool, ops) in arb_scenario()) {
        check_open_addressing::<LinearProbing>(DeletionMode::Soft, &pool, ops)?;
    }

    #[test]
    fn prop_ordered_hard((pool, ops) in arb_scenario()) {
        check_open_addressing::<OrderedLinearProbing>(DeletionMode::Hard, &pool, ops)?;
    }

    #[test]
    fn prop_ordered_soft((pool, ops) in arb_scenario()) {
        check_open_addressing::<OrderedLinearProbing>(DeletionMode::Soft, &pool, ops)?;
    }

    #[test]
    fn prop_quadratic_hard((pool, ops) in arb_scenario()) {
        check_open_addressing::<QuadraticProbing>(DeletionMode::Hard, &pool, ops)?;
    }

    #[test]
    fn prop_quadratic_soft((pool, ops) in arb_scenario()) {
        check_open_addressing::<QuadraticProbing>(DeletionMode::Soft, &pool, ops)?;
    }

    // Separate chaining with interleaved enlarge/shrink: contents and size
    // survive every resize, and each bucket only holds keys that hash to it.
    #[test]
    fn prop_separate_chaining((pool, ops) in arb_scenario()) {
        let mut sut = SeparateChainingHashTable::new();
        let mut model = Model::new();
        for op in ops {
            apply(&mut sut, &mut model, &pool, op, |t, up| {
                if up {
                    let _ = t.enlarge();
                } else {
                    t.shrink();
                }
            })?;
            for idx in 0..sut.capacity() {
                let bucket = sut.bucket(idx).unwrap();
                for e in bucket {
                    prop_assert_eq!(sut.hash(e.key()), idx);
                }
            }
        }
        let mut seen: BTreeMap<String, usize> = BTreeMap::new();
        for e in sut.iter() {
            *seen.entry(e.key().to_string()).or_default() += 1;
        }
        let expected: BTreeMap<String, usize> =
            model.iter().map(|(k, vs)| (k.clone(), vs.len())).collect();
        prop_assert_eq!(seen, expected);
    }
}
