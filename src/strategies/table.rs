//! General `K` selection as a layered table.
//!
//! Layer `l` holds the column `f(·, l + 1)`: for every start index `s`, the
//! best value of `l + 1` digits chosen from `s..N`. Layer 0 is the suffix
//! maximum; each forward step adds one slot:
//!
//! ```text
//! f(s, r+1) = max( d[s] · 10^r + f(s+1, r),  f(s+1, r+1) )
//! ```
//!
//! which is the memoized recurrence with its inner scan folded into a
//! right-to-left running maximum, so a step costs O(N) and the whole table
//! O(N·K). The answer is `f(0, K)` on layer `K - 1`.
//!
//! Walking back down, the boundary is the first index still free; each step
//! commits the leftmost position whose digit plus best tail reaches the
//! value recorded on the layer above.

use crate::digits::{Digit, DigitSequence};
use crate::engine::LayeredEngine;
use crate::strategies::{assert_count, Selection};
use crate::traits::LayeredProblem;
use crate::utils::prepend_digit;

/// One table instance: a borrowed sequence and the requested count.
#[derive(Clone)]
pub struct KSubsequenceTable<'a> {
    digits: &'a [Digit],
    k: usize,
}

/// Column `f(s, remaining)` for `s` in `0..=N - remaining`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub remaining: usize,
    pub best: Vec<u64>,
}

impl<'a> KSubsequenceTable<'a> {
    /// # Panics
    /// Panics unless `1 <= k <= min(seq.len(), MAX_SELECT)`.
    pub fn new(seq: &'a DigitSequence, k: usize) -> Self {
        assert_count(seq.len(), k);
        Self {
            digits: seq.as_slice(),
            k,
        }
    }

    fn n(&self) -> usize {
        self.digits.len()
    }

    /// Value of taking `d[i]` and then the best `lower.remaining` digits after it.
    #[inline]
    fn take(&self, i: usize, lower: &TableColumn) -> u64 {
        prepend_digit(self.digits[i], lower.best[i + 1], lower.remaining)
    }
}

impl<'a> LayeredProblem for KSubsequenceTable<'a> {
    /// Index of a chosen digit.
    type State = usize;
    type Frontier = TableColumn;
    /// First index still available.
    type Boundary = usize;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.k - 1
    }

    fn init_frontier(&self) -> Self::Frontier {
        let n = self.n();
        let mut best = vec![0u64; n];
        let mut running = 0u64;
        for s in (0..n).rev() {
            running = running.max(u64::from(self.digits[s]));
            best[s] = running;
        }
        TableColumn { remaining: 1, best }
    }

    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier {
        debug_assert_eq!(frontier.remaining, layer + 1);
        let remaining = frontier.remaining + 1;
        let len = self.n() + 1 - remaining;
        let mut best = vec![0u64; len];
        let mut running = 0u64;
        for s in (0..len).rev() {
            running = running.max(self.take(s, frontier));
            best[s] = running;
        }
        TableColumn { remaining, best }
    }

    fn terminal_boundary(&self, _frontier_t: &Self::Frontier) -> Self::Boundary {
        0
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier, beta_t: &Self::Boundary) -> Self::Cost {
        frontier_t.best[*beta_t]
    }

    fn trace_step(
        &self,
        _layer: usize,
        frontier_lower: &Self::Frontier,
        frontier_upper: &Self::Frontier,
        beta_upper: &Self::Boundary,
    ) -> (Self::State, Self::Boundary) {
        let start = *beta_upper;
        let target = frontier_upper.best[start];
        let last = self.n() - frontier_upper.remaining;
        let pick = (start..=last)
            .find(|&i| self.take(i, frontier_lower) == target)
            .expect("upper column value must be attained by some pick");
        (pick, pick + 1)
    }

    fn trace_base(
        &self,
        frontier_0: &Self::Frontier,
        beta_0: &Self::Boundary,
    ) -> Option<Self::State> {
        let start = *beta_0;
        let target = frontier_0.best[start];
        (start..self.n()).find(|&i| u64::from(self.digits[i]) == target)
    }
}

/// Maximum `k`-digit value of `seq` via the layered table (value only).
///
/// # Panics
/// Panics unless `1 <= k <= min(seq.len(), MAX_SELECT)`.
pub fn maximize_k_table(seq: &DigitSequence, k: usize) -> u64 {
    LayeredEngine::new(KSubsequenceTable::new(seq, k)).solve()
}

/// Maximum `k`-digit value of `seq` and the leftmost positions producing it.
///
/// # Panics
/// Panics unless `1 <= k <= min(seq.len(), MAX_SELECT)`.
pub fn select_k(seq: &DigitSequence, k: usize) -> Selection {
    let (value, indices) = LayeredEngine::new(KSubsequenceTable::new(seq, k)).run();
    Selection { value, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> DigitSequence {
        s.parse().unwrap()
    }

    #[test]
    fn columns_match_recurrence() {
        let s = seq("9005");
        let p = KSubsequenceTable::new(&s, 3);
        let c1 = p.init_frontier();
        assert_eq!(c1.best, vec![9, 5, 5, 5]);
        let c2 = p.forward_step(0, &c1);
        assert_eq!(c2.remaining, 2);
        assert_eq!(c2.best, vec![95, 5, 5]);
        let c3 = p.forward_step(1, &c2);
        assert_eq!(c3.best, vec![905, 5]);
    }

    #[test]
    fn selection_reads_back_value() {
        for (text, k, value, indices) in [
            ("9005", 3, 905, vec![0, 1, 3]),
            ("905", 2, 95, vec![0, 2]),
            ("109", 2, 19, vec![0, 2]),
            ("3675239", 2, 79, vec![2, 6]),
            ("234234234234278", 12, 434_234_234_278, vec![2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]),
        ] {
            let s = seq(text);
            let sel = select_k(&s, k);
            assert_eq!(sel.value, value, "{text}");
            assert_eq!(sel.indices, indices, "{text}");
            assert_eq!(s.value_at(&sel.indices), value);
        }
    }

    #[test]
    fn k_one_and_k_full() {
        let s = seq("31415926");
        assert_eq!(select_k(&s, 1).indices, vec![5]);
        let full = select_k(&s, 8);
        assert_eq!(full.value, 31_415_926);
        assert_eq!(full.indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn block_size_does_not_change_result() {
        let s = seq("818181911112111");
        let expected = select_k(&s, 12);
        for b in 1..=12 {
            let (value, path) =
                LayeredEngine::with_block_size(KSubsequenceTable::new(&s, 12), b).run();
            assert_eq!(value, expected.value);
            assert_eq!(path, expected.indices);
        }
    }

    #[test]
    fn value_only_matches_run() {
        let s = seq("5183920471");
        for k in 1..=s.len() {
            assert_eq!(maximize_k_table(&s, k), select_k(&s, k).value);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select")]
    fn k_above_len_panics() {
        maximize_k_table(&seq("12"), 3);
    }
}
