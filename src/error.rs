//! Error type shared by every table and by the prime sequence.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// `put` was handed an absent (empty) key or value.
    #[error("invalid argument: {what} must not be empty")]
    InvalidArgument { what: &'static str },

    /// The prime schedule has no entry beyond `last`. Bulk inserters
    /// should treat this as "stop growing", not as a defect.
    #[error("prime sequence exhausted: no prime larger than {last}")]
    ExhaustedSequence { last: usize },

    /// A placement walk visited `capacity` candidate slots without
    /// finding an empty one.
    #[error("probe sequence exhausted after {capacity} probes")]
    ProbeSequenceExhausted { capacity: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TableError {
    /// True for the conditions a stress inserter is expected to absorb.
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(
            self,
            TableError::ExhaustedSequence { .. } | TableError::ProbeSequenceExhausted { .. }
        )
    }
}
