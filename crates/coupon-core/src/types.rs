//! Strong type definitions for coupon codes.
//!
//! A [`Code`] is one to six [`Part`]s, each four symbols long: three payload
//! symbols and one check symbol that depends on the part's position.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::alphabet::contains;
use crate::check_digit::{check_digit, verify, PAYLOAD_LEN};

/// Symbols per part.
pub const PART_LEN: usize = 4;

/// Separator placed between parts when rendering a code.
pub const SEPARATOR: char = '-';

/// Number of parts in a code, always within 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartCount(u8);

impl PartCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 6;
    pub const DEFAULT: usize = 3;

    /// Strict constructor: `None` outside 1..=6.
    pub fn new(n: usize) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&n)
            .then_some(Self(n as u8))
    }

    /// Lenient constructor used for caller-supplied overrides.
    ///
    /// Values below 1 fall back to the default of 3; values above 6 become 6.
    pub fn clamped(n: i64) -> Self {
        if n < Self::MIN as i64 {
            Self(Self::DEFAULT as u8)
        } else if n > Self::MAX as i64 {
            Self(Self::MAX as u8)
        } else {
            Self(n as u8)
        }
    }

    /// The count as a plain number.
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PartCount {
    fn default() -> Self {
        Self(Self::DEFAULT as u8)
    }
}

impl fmt::Display for PartCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Four alphabet symbols at a 1-based position within a code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Part {
    symbols: [u8; PART_LEN],
    position: usize,
}

impl Part {
    /// Build a part from its payload, computing the check symbol.
    pub fn from_payload(payload: [u8; PAYLOAD_LEN], position: usize) -> Self {
        let check = check_digit(&payload, position);
        Self {
            symbols: [payload[0], payload[1], payload[2], check],
            position,
        }
    }

    /// Wrap four already-normalized symbols if their check symbol holds.
    pub fn parse(symbols: [u8; PART_LEN], position: usize) -> Option<Self> {
        let part = Self { symbols, position };
        part.is_valid().then_some(part)
    }

    /// The three payload symbols.
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        [self.symbols[0], self.symbols[1], self.symbols[2]]
    }

    /// The check symbol.
    pub fn check(&self) -> u8 {
        self.symbols[3]
    }

    /// All four symbols.
    pub const fn symbols(&self) -> &[u8; PART_LEN] {
        &self.symbols
    }

    /// 1-based position within the code.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The part as text.
    pub fn as_str(&self) -> &str {
        // Alphabet symbols are ASCII.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Whether every symbol is in the alphabet and the check symbol matches.
    pub fn is_valid(&self) -> bool {
        self.symbols.iter().all(|&s| contains(s)) && verify(&self.symbols, self.position)
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part({}@{})", self.as_str(), self.position)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete coupon code.
///
/// Immutable once built. Part `i` of the inner list sits at position `i + 1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Code {
    parts: Vec<Part>,
}

impl Code {
    /// Assemble a code from parts in order.
    ///
    /// The caller guarantees that part `i` carries position `i + 1`.
    pub(crate) fn from_parts(parts: Vec<Part>) -> Self {
        debug_assert!(parts
            .iter()
            .enumerate()
            .all(|(i, p)| p.position() == i + 1));
        Self { parts }
    }

    /// The parts, in position order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the code has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render the code as `XXXX-XXXX-...`.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(part.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_count_clamped() {
        assert_eq!(PartCount::clamped(0).get(), 3);
        assert_eq!(PartCount::clamped(-5).get(), 3);
        assert_eq!(PartCount::clamped(1).get(), 1);
        assert_eq!(PartCount::clamped(6).get(), 6);
        assert_eq!(PartCount::clamped(7).get(), 6);
        assert_eq!(PartCount::clamped(i64::MAX).get(), 6);
        assert_eq!(PartCount::default().get(), 3);
    }

    #[test]
    fn test_part_count_strict() {
        assert!(PartCount::new(0).is_none());
        assert!(PartCount::new(7).is_none());
        assert_eq!(PartCount::new(4).map(PartCount::get), Some(4));
    }

    #[test]
    fn test_part_from_payload() {
        let part = Part::from_payload(*b"DPQ", 1);
        assert_eq!(part.as_str(), "DPQD");
        assert_eq!(part.check(), b'D');
        assert_eq!(part.payload(), *b"DPQ");
        assert!(part.is_valid());
        assert_eq!(format!("{:?}", part), "Part(DPQD@1)");
    }

    #[test]
    fn test_part_parse() {
        assert!(Part::parse(*b"DPQD", 1).is_some());
        assert!(Part::parse(*b"DPQD", 2).is_none());
        assert!(Part::parse(*b"DPQE", 1).is_none());
        // O is not an alphabet symbol.
        assert!(Part::parse(*b"DPQO", 1).is_none());
    }

    #[test]
    fn test_code_display() {
        let code = Code::from_parts(vec![
            Part::from_payload(*b"DPQ", 1),
            Part::from_payload(*b"Y32", 2),
            Part::from_payload(*b"40W", 3),
        ]);
        assert_eq!(code.to_string(), "DPQD-Y328-40W2");
        assert_eq!(code.len(), 3);
        assert_eq!(String::from(code.clone()), "DPQD-Y328-40W2");
        assert_eq!(
            serde_json::to_string(&code).unwrap(),
            "\"DPQD-Y328-40W2\""
        );
    }
}
