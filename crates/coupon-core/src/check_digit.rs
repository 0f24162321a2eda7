//! Positional check symbol for a three-symbol payload.
//!
//! The accumulator starts at the part's 1-based position; each payload
//! symbol multiplies it by 19 and adds the symbol's index. The check symbol
//! is the alphabet member at `accumulator mod 32`.
//!
//! Starting from the position makes the same payload check differently in
//! different slots, so reordered parts are caught. Substitutions are caught
//! with high probability but not with certainty: two payloads can share a
//! check symbol.

use crate::alphabet::{index_of, symbol_at};

/// Odd multiplier applied once per payload symbol.
pub const MULTIPLIER: usize = 19;

/// Number of payload symbols in a part.
pub const PAYLOAD_LEN: usize = 3;

/// Compute the check symbol for `payload` at 1-based `position`.
///
/// Bytes outside the alphabet contribute nothing to the accumulator; callers
/// only pass normalized symbols.
pub fn check_digit(payload: &[u8; PAYLOAD_LEN], position: usize) -> u8 {
    let check = payload.iter().fold(position, |acc, &symbol| {
        let value = index_of(symbol).map_or(0, usize::from);
        acc * MULTIPLIER + value
    });
    symbol_at(check)
}

/// Whether `part`'s fourth symbol is the check symbol of its first three.
pub fn verify(part: &[u8; 4], position: usize) -> bool {
    let payload = [part[0], part[1], part[2]];
    check_digit(&payload, position) == part[3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SYMBOLS;

    #[test]
    fn test_known_values() {
        assert_eq!(check_digit(b"DPQ", 1), b'D');
        assert_eq!(check_digit(b"DPQ", 2), b'Q');
        assert_eq!(check_digit(b"DPQ", 3), b'3');
        assert_eq!(check_digit(b"000", 1), b'B');
        assert_eq!(check_digit(b"000", 2), b'N');
        assert_eq!(check_digit(b"Y32", 2), b'8');
    }

    #[test]
    fn test_zero_payload_is_position_times_cube() {
        // 19^3 = 6859, 6859 mod 32 = 11
        for position in 1..=6 {
            assert_eq!(check_digit(b"000", position), symbol_at(position * 11));
        }
    }

    #[test]
    fn test_position_sensitive() {
        let checks: Vec<u8> = (1..=6).map(|p| check_digit(b"K87", p)).collect();
        for (i, a) in checks.iter().enumerate() {
            for b in &checks[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_single_substitution_changes_check() {
        // The payload index enters multiplied by an odd power of 19, which
        // is invertible mod 32, so a single substitution always moves the
        // check symbol.
        let base = *b"AJ5";
        let expected = check_digit(&base, 2);
        for slot in 0..PAYLOAD_LEN {
            for &s in SYMBOLS.iter().filter(|&&s| s != base[slot]) {
                let mut altered = base;
                altered[slot] = s;
                assert_ne!(check_digit(&altered, 2), expected);
            }
        }
    }

    #[test]
    fn test_verify() {
        assert!(verify(b"DPQD", 1));
        assert!(!verify(b"DPQE", 1));
        assert!(!verify(b"DPQD", 2));
    }
}
