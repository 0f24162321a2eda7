//! Code validation: normalize, regroup, recheck.

use crate::alphabet::normalize;
use crate::error::ValidationError;
use crate::types::{Code, Part, PartCount, PART_LEN};

/// Checks user-supplied code text against an expected part count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    pub parts: PartCount,
}

impl Validator {
    /// Create a validator expecting `parts` parts.
    pub fn new(parts: PartCount) -> Self {
        Self { parts }
    }

    /// Validate `text` and return the normalized code.
    pub fn validate(&self, text: &str) -> Result<Code, ValidationError> {
        validate_code(text, self.parts)
    }
}

/// Validate `text` as a code of `parts` parts.
///
/// Case, separators and the look-alike letters `O`, `I`, `Z`, `S` are
/// tolerated. Only complete runs of four symbols count as parts; leftover
/// symbols after the last complete part are ignored.
pub fn validate_code(text: &str, parts: PartCount) -> Result<Code, ValidationError> {
    let normalized = normalize(text);
    let symbols = normalized.as_bytes();

    let expected = parts.get();
    let found = symbols.len() / PART_LEN;
    if found != expected {
        return Err(ValidationError::PartCountMismatch { expected, found });
    }

    let mut checked = Vec::with_capacity(expected);
    for (i, chunk) in symbols.chunks_exact(PART_LEN).enumerate() {
        let position = i + 1;
        let symbols = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let part = Part::parse(symbols, position).ok_or_else(|| {
            ValidationError::ChecksumMismatch {
                position,
                part: String::from_utf8_lossy(chunk).into_owned(),
            }
        })?;
        checked.push(part);
    }

    Ok(Code::from_parts(checked))
}

/// Whether `text` is a valid code of `parts` parts.
pub fn is_valid_code(text: &str, parts: PartCount) -> bool {
    validate_code(text, parts).is_ok()
}
