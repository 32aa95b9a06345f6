//! Digit-selection strategies.
//!
//! - [`pair`]     : `K = 2` via prefix/suffix maxima, O(N).
//! - [`memoized`] : general `K`, top-down recursion over `(start, remaining)`.
//! - [`table`]    : general `K`, the same recurrence as a [`LayeredProblem`]
//!   run through the checkpointed engine; also reconstructs indices.
//!
//! [`LayeredProblem`]: crate::traits::LayeredProblem

use std::fmt;
use std::str::FromStr;

use crate::digits::DigitSequence;
use crate::utils::MAX_SELECT;

pub mod memoized;
pub mod pair;
pub mod table;

/// Best value together with the positions that produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub value: u64,
    /// Strictly increasing positions into the source sequence.
    pub indices: Vec<usize>,
}

impl Selection {
    /// The chosen digits, in order.
    pub fn digits<'a>(&'a self, seq: &'a DigitSequence) -> impl Iterator<Item = u8> + 'a {
        self.indices.iter().map(move |&i| seq[i])
    }
}

/// Top-level precondition shared by the general-`K` strategies.
pub(crate) fn assert_count(len: usize, k: usize) {
    assert!(k >= 1, "must select at least one digit");
    assert!(
        k <= len,
        "cannot select {k} digits from a sequence of length {len}"
    );
    assert!(
        k <= MAX_SELECT,
        "selecting {k} digits overflows u64 (limit {MAX_SELECT})"
    );
}

/// Which maximizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Only valid for `k == 2`.
    Pair,
    #[default]
    Memoized,
    Table,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Pair, Strategy::Memoized, Strategy::Table];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Pair => "pair",
            Strategy::Memoized => "memoized",
            Strategy::Table => "table",
        }
    }

    /// Whether this strategy accepts a request for `k` digits.
    pub fn supports(self, k: usize) -> bool {
        match self {
            Strategy::Pair => k == 2,
            Strategy::Memoized | Strategy::Table => true,
        }
    }

    /// Maximum `k`-digit value of `seq`.
    ///
    /// # Panics
    /// Panics if `k` is outside `1..=seq.len()`, exceeds
    /// [`MAX_SELECT`](crate::utils::MAX_SELECT), or the strategy does not
    /// support `k`.
    pub fn maximize(self, seq: &DigitSequence, k: usize) -> u64 {
        match self {
            Strategy::Pair => {
                assert_eq!(k, 2, "pair strategy selects exactly 2 digits");
                pair::maximize_pair(seq)
            }
            Strategy::Memoized => memoized::maximize_k(seq, k),
            Strategy::Table => table::maximize_k_table(seq, k),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pair" => Ok(Self::Pair),
            "memoized" | "memo" => Ok(Self::Memoized),
            "table" => Ok(Self::Table),
            other => Err(format!(
                "unknown strategy '{other}' (expected pair, memoized or table)"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("memo".parse::<Strategy>(), Ok(Strategy::Memoized));
        assert!("greedy".parse::<Strategy>().is_err());
    }

    #[test]
    fn every_strategy_agrees_on_pairs() {
        let seq: DigitSequence = "3675239".parse().unwrap();
        for s in Strategy::ALL {
            assert_eq!(s.maximize(&seq, 2), 79, "{s}");
        }
    }

    #[test]
    #[should_panic(expected = "exactly 2")]
    fn pair_rejects_other_counts() {
        let seq: DigitSequence = "12345".parse().unwrap();
        Strategy::Pair.maximize(&seq, 3);
    }

    #[test]
    fn selection_digits_follow_indices() {
        let seq: DigitSequence = "9005".parse().unwrap();
        let sel = Selection {
            value: 905,
            indices: vec![0, 1, 3],
        };
        assert_eq!(sel.digits(&seq).collect::<Vec<_>>(), vec![9, 0, 5]);
    }
}
