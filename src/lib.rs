//! Ordered-subsequence digit maximization.
//!
//! Given a sequence of decimal digits, choose exactly `K` of them without
//! reordering so that the number read left to right is as large as possible.
//!
//! ## Strategies
//! 1. [`strategies::pair`]: the `K = 2` case in one linear pass over
//!    prefix-maximum and suffix-maximum arrays.
//! 2. [`strategies::memoized`]: top-down recursion over
//!    `(start index, remaining count)` with a memo owned by a single query.
//! 3. [`strategies::table`]: the same recurrence filled bottom-up as a
//!    layered DP ([`LayeredProblem`]) and run through [`LayeredEngine`],
//!    which also reconstructs the chosen indices while keeping only about
//!    √K frontiers alive.
//!
//! ## Quick start
//! ```
//! use subseq_max::{maximize_k, maximize_pair, DigitSequence};
//!
//! let bank: DigitSequence = "818181911112111".parse().unwrap();
//! assert_eq!(maximize_pair(&bank), 92);
//! assert_eq!(maximize_k(&bank, 12), 888_911_112_111);
//! ```
//!
//! Reconstructing the selection:
//! ```
//! use subseq_max::{select_k, DigitSequence};
//!
//! let seq: DigitSequence = "9005".parse().unwrap();
//! let sel = select_k(&seq, 3);
//! assert_eq!(sel.value, 905);
//! assert_eq!(sel.indices, vec![0, 1, 3]);
//! ```
//!
//! Line-oriented puzzle input is handled by [`input`], which validates every
//! bank before any maximizer runs.

pub mod blocks;
pub mod builder;
pub mod digits;
pub mod engine;
pub mod input;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::LayeredEngineBuilder;
pub use crate::digits::{Digit, DigitError, DigitSequence};
pub use crate::engine::LayeredEngine;
pub use crate::input::{parse_banks, total_max, Bank, InputError};
pub use crate::strategies::memoized::maximize_k;
pub use crate::strategies::pair::{maximize_pair, select_pair};
pub use crate::strategies::table::{maximize_k_table, select_k};
pub use crate::strategies::{Selection, Strategy};
pub use crate::traits::LayeredProblem;
