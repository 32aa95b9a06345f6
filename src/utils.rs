//! Assorted utilities and helpers.
//!
//! Positional arithmetic for building numbers digit by digit, and the
//! block-size heuristic used by the layered engine.

/// Widest selection whose value always fits in a `u64`.
///
/// Any 19-digit decimal number is below `u64::MAX` (≈ 1.8·10¹⁹); a 20-digit
/// one may not be.
pub const MAX_SELECT: usize = 19;

const POW10: [u64; MAX_SELECT + 1] = {
    let mut table = [1u64; MAX_SELECT + 1];
    let mut i = 1;
    while i <= MAX_SELECT {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// `10^width`.
///
/// # Panics
/// Panics if `width > MAX_SELECT`.
#[inline]
pub fn pow10(width: usize) -> u64 {
    POW10[width]
}

/// Place `digit` in front of a `width`-slot tail.
///
/// `width` is the number of digit slots the tail occupies, not the number of
/// digits in its printed magnitude: a tail chosen as `0, 5` has width 2 and
/// value 5, and prepending 9 must give 905.
#[inline]
pub fn prepend_digit(digit: u8, tail: u64, width: usize) -> u64 {
    debug_assert!(digit <= 9);
    debug_assert!(width == 0 || tail < pow10(width));
    u64::from(digit) * pow10(width) + tail
}

/// Compute an integer square root-style block size for T layers.
///
/// This is the heuristic used by [`crate::engine::LayeredEngine::new`] to
/// decide how many frontiers to checkpoint.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}
