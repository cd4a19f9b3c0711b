#![allow(dead_code)]

use prime_probe::{
    DeletionMode, HashTable, LinearProbingHashTable, OrderedLinearProbingHashTable,
    QuadraticProbingHashTable, SeparateChainingHashTable,
};
use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install an `env_logger` once per test binary. `RUST_LOG` overrides the
/// default `warn` filter.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("prime_probe", LevelFilter::Warn)
            .is_test(true)
            .parse_default_env();
        let _ = builder.try_init();
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SeparateChaining,
    Linear,
    OrderedLinear,
    Quadratic,
}

pub const STRATEGIES: [Strategy; 4] = [
    Strategy::SeparateChaining,
    Strategy::Linear,
    Strategy::OrderedLinear,
    Strategy::Quadratic,
];

/// A fresh table of the given strategy. Separate chaining has no deletion
/// mode and ignores `mode`.
pub fn table(strategy: Strategy, mode: DeletionMode) -> Box<dyn HashTable> {
    match strategy {
        Strategy::SeparateChaining => Box::new(SeparateChainingHashTable::new()),
        Strategy::Linear => Box::new(LinearProbingHashTable::with_deletion(mode)),
        Strategy::OrderedLinear => Box::new(OrderedLinearProbingHashTable::with_deletion(mode)),
        Strategy::Quadratic => Box::new(QuadraticProbingHashTable::with_deletion(mode)),
    }
}

pub fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

pub const BOOK: [(&str, &str); 16] = [
    ("DeAndre", "367-900-1199"),
    ("Charles", "667-093-4567"),
    ("Christine", "104-356-2111"),
    ("Alexander", "590-260-9001"),
    ("Carl", "850-102-8974"),
    ("Paulette", "215-334-6807"),
    ("Aditya", "890-123-0209"),
    ("Arnold", "894-590-0011"),
    ("Jacqueline", "321-990-2801"),
    ("Yi", "921-350-4314"),
    ("Tiffany", "810-279-0711"),
    ("Nakeesha", "708-890-2234"),
    ("Jason", "900-701-2902"),
    ("Jessie", "705-120-7500"),
    ("Helen", "810-206-9450"),
    ("Mary", "888-121-3340"),
];
