//! Rejects parts where one adjacent swap produces another valid part.
//!
//! Only swaps inside a part are considered. A swap across the hyphen (last
//! symbol of one part with the first of the next) is not guarded.

use crate::check_digit::verify;

/// The three adjacent swaps of a four-symbol part.
pub fn adjacent_swaps(part: &[u8; 4]) -> [[u8; 4]; 3] {
    let [a, b, c, d] = *part;
    [[b, a, c, d], [a, c, b, d], [a, b, d, c]]
}

/// Whether an adjacent transposition of `part` would still pass its check.
///
/// Swaps that leave the part unchanged (two equal neighbours) are skipped.
pub fn is_ambiguous(part: &[u8; 4], position: usize) -> bool {
    adjacent_swaps(part)
        .iter()
        .filter(|swapped| *swapped != part)
        .any(|swapped| verify(swapped, position))
}
