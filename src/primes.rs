//! Prime capacity schedule with a movable cursor.
//!
//! Tables never compute primes on the fly: they step through a fixed,
//! strictly increasing schedule. The default schedule starts at 7 and
//! each following entry is the largest prime not exceeding twice its
//! predecessor, which roughly doubles capacity on every growth step.

use crate::error::TableError;

/// Default schedule: 7, then the largest prime `<= 2 * previous`.
pub const DEFAULT_SCHEDULE: [usize; 29] = [
    7,
    13,
    23,
    43,
    83,
    163,
    317,
    631,
    1259,
    2503,
    5003,
    9973,
    19937,
    39869,
    79699,
    159389,
    318751,
    637499,
    1274989,
    2549951,
    5099893,
    10199767,
    20399531,
    40799041,
    81598067,
    163196129,
    326392249,
    652784471,
    1305568919,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSequence {
    schedule: Vec<usize>,
    cursor: usize,
}

impl PrimeSequence {
    pub fn new() -> Self {
        Self {
            schedule: DEFAULT_SCHEDULE.to_vec(),
            cursor: 0,
        }
    }

    /// Build a sequence over a caller-provided schedule. The schedule must
    /// be non-empty, strictly increasing and contain only primes.
    pub fn from_schedule(schedule: Vec<usize>) -> Result<Self, TableError> {
        if schedule.is_empty() {
            return Err(TableError::InvalidConfig(
                "prime schedule must not be empty".into(),
            ));
        }
        if let Some(&p) = schedule.iter().find(|&&p| !is_prime(p)) {
            return Err(TableError::InvalidConfig(format!(
                "prime schedule contains non-prime {p}"
            )));
        }
        if schedule.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TableError::InvalidConfig(
                "prime schedule must be strictly increasing".into(),
            ));
        }
        Ok(Self {
            schedule,
            cursor: 0,
        })
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.schedule[self.cursor]
    }

    /// Advance to the next larger prime. The cursor does not move on error.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<usize, TableError> {
        if self.cursor + 1 >= self.schedule.len() {
            return Err(TableError::ExhaustedSequence {
                last: self.current(),
            });
        }
        self.cursor += 1;
        Ok(self.current())
    }

    /// Step back one prime; holds at the first entry.
    pub fn previous(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn initial(&self) -> usize {
        self.schedule[0]
    }

    pub fn schedule(&self) -> &[usize] {
        &self.schedule
    }
}

impl Default for PrimeSequence {
    fn default() -> Self {
        Self::new()
    }
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: every default entry is prime and is the largest prime not
    /// exceeding twice its predecessor.
    #[test]
    fn default_schedule_is_largest_prime_below_double() {
        for w in DEFAULT_SCHEDULE.windows(2) {
            assert!(is_prime(w[1]), "{} is not prime", w[1]);
            let gap_has_prime = (w[1] + 1..=2 * w[0]).any(is_prime);
            assert!(!gap_has_prime, "a larger prime fits below 2 * {}", w[0]);
        }
    }

    #[test]
    fn starts_at_seven_and_steps_both_ways() {
        let mut p = PrimeSequence::new();
        assert_eq!(p.current(), 7);
        assert_eq!(p.next(), Ok(13));
        assert_eq!(p.next(), Ok(23));
        assert_eq!(p.current(), 23);
        assert_eq!(p.previous(), 13);
        assert_eq!(p.previous(), 7);
        assert_eq!(p.position(), 0);
    }

    /// Invariant: stepping back below the first entry holds there.
    #[test]
    fn previous_holds_at_initial() {
        let mut p = PrimeSequence::new();
        assert_eq!(p.previous(), 7);
        assert_eq!(p.previous(), 7);
        assert_eq!(p.current(), p.initial());
    }

    /// Invariant: exhaustion is reported without moving the cursor.
    #[test]
    fn next_fails_at_end_and_keeps_cursor() {
        let mut p = PrimeSequence::from_schedule(vec![7, 13]).unwrap();
        assert_eq!(p.next(), Ok(13));
        assert_eq!(p.next(), Err(TableError::ExhaustedSequence { last: 13 }));
        assert_eq!(p.current(), 13);
        assert_eq!(p.position(), 1);
        p.reset();
        assert_eq!(p.current(), 7);
    }

    #[test]
    fn default_schedule_is_finite() {
        let mut p = PrimeSequence::new();
        let mut steps = 0;
        while p.next().is_ok() {
            steps += 1;
        }
        assert_eq!(steps, DEFAULT_SCHEDULE.len() - 1);
        assert_eq!(p.current(), 1305568919);
    }

    #[test]
    fn custom_schedule_validation() {
        assert!(matches!(
            PrimeSequence::from_schedule(vec![]),
            Err(TableError::InvalidConfig(_))
        ));
        assert!(matches!(
            PrimeSequence::from_schedule(vec![7, 9]),
            Err(TableError::InvalidConfig(_))
        ));
        assert!(matches!(
            PrimeSequence::from_schedule(vec![13, 7]),
            Err(TableError::InvalidConfig(_))
        ));
        assert!(PrimeSequence::from_schedule(vec![3, 5, 11]).is_ok());
    }
}
