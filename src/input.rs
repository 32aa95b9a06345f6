//! Line-oriented puzzle input and per-bank aggregation.
//!
//! Every input shape problem (a stray character, a bank too short for the
//! requested count, a count no `u64` can hold) is reported as an
//! [`InputError`] before any maximizer runs, so a failing input never yields
//! a partial total.

use thiserror::Error;

use crate::digits::{DigitError, DigitSequence};
use crate::strategies::Strategy;
use crate::utils::MAX_SELECT;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("line {line}: {source}")]
    Digit {
        line: usize,
        #[source]
        source: DigitError,
    },
    #[error("line {line}: bank has {len} digits, cannot select {k}")]
    TooShort { line: usize, len: usize, k: usize },
    #[error("cannot select {k} digits: supported range is 1..={}", MAX_SELECT)]
    UnsupportedCount { k: usize },
    #[error("strategy '{strategy}' cannot select {k} digits")]
    UnsupportedStrategy { strategy: Strategy, k: usize },
    #[error("total of {banks} banks overflows u64")]
    Overflow { banks: usize },
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// 1-based line number in the source text.
    pub line: usize,
    pub digits: DigitSequence,
}

/// Parse one bank per non-blank line.
///
/// Blank lines (including the one after a trailing newline) are skipped;
/// line numbers still count them.
pub fn parse_banks(text: &str) -> Result<Vec<Bank>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim_end_matches('\r').is_empty())
        .map(|(idx, raw)| {
            let line = idx + 1;
            DigitSequence::parse(raw)
                .map(|digits| Bank { line, digits })
                .map_err(|source| InputError::Digit { line, source })
        })
        .collect()
}

/// Check `k` against the strategy and every bank.
pub fn validate_count(k: usize, strategy: Strategy, banks: &[Bank]) -> Result<(), InputError> {
    if k == 0 || k > MAX_SELECT {
        return Err(InputError::UnsupportedCount { k });
    }
    if !strategy.supports(k) {
        return Err(InputError::UnsupportedStrategy { strategy, k });
    }
    if let Some(bank) = banks.iter().find(|b| b.digits.len() < k) {
        return Err(InputError::TooShort {
            line: bank.line,
            len: bank.digits.len(),
            k,
        });
    }
    Ok(())
}

/// Best `k`-digit value of each bank, in input order.
pub fn bank_values(banks: &[Bank], k: usize, strategy: Strategy) -> Result<Vec<u64>, InputError> {
    validate_count(k, strategy, banks)?;

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("bank_values", banks = banks.len(), k, %strategy);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    let values = banks
        .par_iter()
        .map(|bank| strategy.maximize(&bank.digits, k))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let values = banks
        .iter()
        .map(|bank| strategy.maximize(&bank.digits, k))
        .collect();

    Ok(values)
}

/// Sum of the best `k`-digit value over all banks.
pub fn total_max(banks: &[Bank], k: usize, strategy: Strategy) -> Result<u64, InputError> {
    bank_values(banks, k, strategy)?
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .ok_or(InputError::Overflow { banks: banks.len() })
}
