//! Validated digit sequences.
//!
//! A [`DigitSequence`] is the only input the maximizers accept. Construction
//! is the single place where characters are checked, so every strategy can
//! index the digits without re-validating them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single decimal digit, `0..=9`.
pub type Digit = u8;

/// Rejection of a character that is not an ASCII decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// `column` is 1-based.
    #[error("invalid digit {ch:?} at column {column}")]
    InvalidDigit { column: usize, ch: char },
    #[error("digit value {value} at index {index} is outside 0..=9")]
    OutOfRange { index: usize, value: u8 },
}

/// Ordered, immutable run of digits indexed `0..len`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitSequence {
    digits: Vec<Digit>,
}

impl DigitSequence {
    /// Parse one line of text. A trailing `\r` is ignored.
    pub fn parse(line: &str) -> Result<Self, DigitError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let digits = line
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                ch.to_digit(10)
                    .map(|d| d as Digit)
                    .ok_or(DigitError::InvalidDigit {
                        column: idx + 1,
                        ch,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }

    /// Build from raw digit values, rejecting anything above 9.
    pub fn from_digits(digits: Vec<Digit>) -> Result<Self, DigitError> {
        if let Some((index, &value)) = digits.iter().enumerate().find(|(_, &d)| d > 9) {
            return Err(DigitError::OutOfRange { index, value });
        }
        Ok(Self { digits })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Digit> {
        self.digits.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits.iter().copied()
    }

    /// Largest digit, or `None` for an empty sequence.
    pub fn max_digit(&self) -> Option<Digit> {
        self.digits.iter().copied().max()
    }

    /// Value of the digits at `indices`, read in the order given.
    ///
    /// # Panics
    /// Panics if an index is out of bounds.
    pub fn value_at(&self, indices: &[usize]) -> u64 {
        indices
            .iter()
            .fold(0u64, |acc, &i| acc * 10 + u64::from(self.digits[i]))
    }
}

impl std::ops::Index<usize> for DigitSequence {
    type Output = Digit;

    fn index(&self, idx: usize) -> &Digit {
        &self.digits[idx]
    }
}

impl FromStr for DigitSequence {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for DigitSequence {
    type Error = DigitError;

    /// Interpret bytes as ASCII digits (`b'0'..=b'9'`).
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let digits = bytes
            .iter()
            .enumerate()
            .map(|(idx, &b)| {
                if b.is_ascii_digit() {
                    Ok(b - b'0')
                } else {
                    Err(DigitError::InvalidDigit {
                        column: idx + 1,
                        ch: char::from(b),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSequence(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_including_zero() {
        let seq: DigitSequence = "3675239".parse().unwrap();
        assert_eq!(seq.as_slice(), &[3, 6, 7, 5, 2, 3, 9]);
        let seq = DigitSequence::parse("905").unwrap();
        assert_eq!(seq.as_slice(), &[9, 0, 5]);
        assert_eq!(seq.max_digit(), Some(9));
    }

    #[test]
    fn strips_carriage_return() {
        let seq = DigitSequence::parse("12\r").unwrap();
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn rejects_non_digit_with_column() {
        let err = DigitSequence::parse("12a4").unwrap_err();
        assert_eq!(err, DigitError::InvalidDigit { column: 3, ch: 'a' });
        assert_eq!(err.to_string(), "invalid digit 'a' at column 3");

        let err = DigitSequence::parse("1 2").unwrap_err();
        assert_eq!(err, DigitError::InvalidDigit { column: 2, ch: ' ' });
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit one: a Unicode digit, not a decimal ASCII digit.
        assert!(DigitSequence::parse("1\u{0661}").is_err());
    }

    #[test]
    fn from_digits_checks_range() {
        assert!(DigitSequence::from_digits(vec![0, 9, 3]).is_ok());
        assert_eq!(
            DigitSequence::from_digits(vec![1, 10]),
            Err(DigitError::OutOfRange { index: 1, value: 10 })
        );
    }

    #[test]
    fn bytes_and_display_agree() {
        let seq = DigitSequence::try_from(&b"0451"[..]).unwrap();
        assert_eq!(seq.to_string(), "0451");
        assert_eq!(format!("{seq:?}"), "DigitSequence(\"0451\")");
        assert!(DigitSequence::try_from(&b"04-1"[..]).is_err());
    }

    #[test]
    fn value_at_reads_in_order() {
        let seq: DigitSequence = "9005".parse().unwrap();
        assert_eq!(seq.value_at(&[0, 1, 3]), 905);
        assert_eq!(seq.value_at(&[1, 2]), 0);
        assert_eq!(seq.value_at(&[]), 0);
    }

    #[test]
    fn empty_line_is_empty_sequence() {
        let seq = DigitSequence::parse("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.max_digit(), None);
    }
}
