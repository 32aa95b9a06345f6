//! Best two-digit selection in one linear pass.
//!
//! For a split point `i`, the best left digit is the maximum of `d[0..=i]`
//! and the best right digit is the maximum of `d[i+1..]`. Every pair
//! `(i, j)` with `i < j` is covered by split `i`, so maximizing over splits
//! finds the global optimum. Comparison is most-significant digit first,
//! ties on the left digit broken by the larger right digit.

use crate::digits::{Digit, DigitSequence};
use crate::strategies::Selection;

/// Running maximum and the leftmost position that attains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Peak {
    digit: Digit,
    index: usize,
}

/// `out[i]` = best of `d[0..=i]`.
fn prefix_peaks(d: &[Digit]) -> Vec<Peak> {
    let mut out = Vec::with_capacity(d.len());
    let mut best = Peak {
        digit: d[0],
        index: 0,
    };
    for (index, &digit) in d.iter().enumerate() {
        if digit > best.digit {
            best = Peak { digit, index };
        }
        out.push(best);
    }
    out
}

/// `out[i]` = best of `d[i..]`, preferring the leftmost on ties.
fn suffix_peaks(d: &[Digit]) -> Vec<Peak> {
    let n = d.len();
    let mut out = vec![
        Peak {
            digit: d[n - 1],
            index: n - 1,
        };
        n
    ];
    for i in (0..n - 1).rev() {
        out[i] = if d[i] >= out[i + 1].digit {
            Peak {
                digit: d[i],
                index: i,
            }
        } else {
            out[i + 1]
        };
    }
    out
}

/// Maximum of `10·d[i] + d[j]` over `i < j`, with the leftmost such `(i, j)`.
///
/// # Panics
/// Panics if `seq.len() < 2`.
pub fn select_pair(seq: &DigitSequence) -> Selection {
    assert!(
        seq.len() >= 2,
        "pair selection needs at least 2 digits, got {}",
        seq.len()
    );
    let d = seq.as_slice();
    let from_left = prefix_peaks(d);
    let from_right = suffix_peaks(d);

    let mut best = (from_left[0], from_right[1]);
    for split in 1..d.len() - 1 {
        let (left, right) = (from_left[split], from_right[split + 1]);
        if left.digit > best.0.digit || (left.digit == best.0.digit && right.digit > best.1.digit)
        {
            best = (left, right);
        }
    }

    let (left, right) = best;
    Selection {
        value: u64::from(left.digit) * 10 + u64::from(right.digit),
        indices: vec![left.index, right.index],
    }
}

/// Maximum two-digit value obtainable from `seq` without reordering.
///
/// # Panics
/// Panics if `seq.len() < 2`.
pub fn maximize_pair(seq: &DigitSequence) -> u64 {
    select_pair(seq).value
}
