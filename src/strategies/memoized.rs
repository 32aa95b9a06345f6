//! General `K` selection by memoized recursion.
//!
//! `f(start, remaining)` is the best value obtainable by choosing `remaining`
//! digits, in order, from positions `start..N`:
//!
//! ```text
//! f(s, 1) = max(d[s..N])
//! f(s, r) = max over i in s..=N-r of  d[i] · 10^(r-1) + f(i+1, r-1)
//! ```
//!
//! The optimal tail for a given `(start, remaining)` does not depend on the
//! digits chosen before `start`, so the pair is a complete memo key. The
//! multiplier is `10^(r-1)`, the tail's slot count, never its printed
//! length: a tail chosen as `0, 5` is worth 5 but still fills two slots.
//!
//! A [`Memo`] is only meaningful for the sequence and `K` it was built
//! against, so it lives inside a [`KSubsequenceMaximizer`] that borrows the
//! sequence and is dropped with it.

use std::collections::HashMap;

use crate::digits::DigitSequence;
use crate::strategies::assert_count;
use crate::utils::prepend_digit;

/// Identifies the subproblem "choose `remaining` digits from `start..N`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub start: usize,
    pub remaining: usize,
}

/// Subproblem values for one `(sequence, K)` query.
#[derive(Debug, Default)]
pub struct Memo {
    table: HashMap<MemoKey, u64>,
    hits: usize,
}

impl Memo {
    pub fn get(&self, key: MemoKey) -> Option<u64> {
        self.table.get(&key).copied()
    }

    /// Number of stored subproblems.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Lookups answered from the table.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// One maximization query: a sequence, a count, and the memo they own.
pub struct KSubsequenceMaximizer<'a> {
    seq: &'a DigitSequence,
    k: usize,
    memo: Memo,
}

impl<'a> KSubsequenceMaximizer<'a> {
    /// # Panics
    /// Panics unless `1 <= k <= min(seq.len(), MAX_SELECT)`.
    pub fn new(seq: &'a DigitSequence, k: usize) -> Self {
        assert_count(seq.len(), k);
        Self {
            seq,
            k,
            memo: Memo::default(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    /// `f(0, K)`.
    pub fn solve(&mut self) -> u64 {
        self.best_from(0, self.k)
    }

    /// `f(start, remaining)`.
    ///
    /// # Panics
    /// Panics if fewer than `remaining` digits are left at `start`.
    pub fn best_from(&mut self, start: usize, remaining: usize) -> u64 {
        let seq = self.seq;
        let d = seq.as_slice();
        let n = d.len();
        assert!(
            remaining >= 1 && start < n && remaining <= n - start,
            "no selection of {remaining} digits starting at {start} (length {n})"
        );

        if remaining == 1 {
            return d[start..].iter().copied().max().map_or(0, u64::from);
        }

        let key = MemoKey { start, remaining };
        if let Some(v) = self.memo.get(key) {
            self.memo.hits += 1;
            return v;
        }

        let width = remaining - 1;
        let mut best = 0u64;
        for i in start..=n - remaining {
            let tail = self.best_from(i + 1, width);
            best = best.max(prepend_digit(d[i], tail, width));
        }

        self.memo.table.insert(key, best);
        best
    }
}

/// Maximum `k`-digit value of `seq`, digits kept in order.
///
/// Each call owns a fresh memo.
///
/// # Panics
/// Panics unless `1 <= k <= min(seq.len(), MAX_SELECT)`.
pub fn maximize_k(seq: &DigitSequence, k: usize) -> u64 {
    KSubsequenceMaximizer::new(seq, k).solve()
}
