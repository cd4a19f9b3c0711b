//! Construction-time configuration for the open-addressing tables.

use crate::error::TableError;
use crate::primes::PrimeSequence;

/// Load factor above which an open-addressing table grows on `put`.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.5;

/// How `remove` disposes of a slot. Fixed for the lifetime of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeletionMode {
    /// Empty the slot and repair the probe run behind it.
    #[default]
    Hard,
    /// Leave a tombstone that still counts toward the load factor.
    Soft,
}

impl DeletionMode {
    pub fn is_soft(self) -> bool {
        matches!(self, DeletionMode::Soft)
    }
}

#[derive(Debug, Clone)]
pub struct TableConfig {
    deletion: DeletionMode,
    load_threshold: f64,
    primes: PrimeSequence,
}

impl TableConfig {
    pub fn new() -> Self {
        Self {
            deletion: DeletionMode::default(),
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            primes: PrimeSequence::new(),
        }
    }

    pub fn deletion(mut self, mode: DeletionMode) -> Self {
        self.deletion = mode;
        self
    }

    pub fn soft_deletion(self) -> Self {
        self.deletion(DeletionMode::Soft)
    }

    /// Threshold must lie in `(0, 1]`.
    pub fn load_threshold(mut self, threshold: f64) -> Result<Self, TableError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(TableError::InvalidConfig(format!(
                "load threshold {threshold} outside (0, 1]"
            )));
        }
        self.load_threshold = threshold;
        Ok(self)
    }

    /// Replace the capacity schedule. The cursor is rewound to its first prime.
    pub fn primes(mut self, mut primes: PrimeSequence) -> Self {
        primes.reset();
        self.primes = primes;
        self
    }

    pub fn deletion_mode(&self) -> DeletionMode {
        self.deletion
    }

    pub fn threshold(&self) -> f64 {
        self.load_threshold
    }

    pub(crate) fn prime_sequence(&self) -> &PrimeSequence {
        &self.primes
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = TableConfig::default();
        assert_eq!(c.deletion_mode(), DeletionMode::Hard);
        assert_eq!(c.threshold(), 0.5);
        assert_eq!(c.prime_sequence().current(), 7);
    }

    /// Invariant: thresholds outside (0, 1] are rejected, including NaN.
    #[test]
    fn threshold_bounds() {
        assert!(TableConfig::new().load_threshold(0.0).is_err());
        assert!(TableConfig::new().load_threshold(1.5).is_err());
        assert!(TableConfig::new().load_threshold(f64::NAN).is_err());
        assert_eq!(TableConfig::new().load_threshold(1.0).unwrap().threshold(), 1.0);
    }

    /// Invariant: a schedule handed to the builder always starts from its
    /// first prime.
    #[test]
    fn primes_are_rewound() {
        let mut p = PrimeSequence::new();
        p.next().unwrap();
        let c = TableConfig::new().primes(p).soft_deletion();
        assert_eq!(c.prime_sequence().current(), 7);
        assert!(c.deletion_mode().is_soft());
    }
}
