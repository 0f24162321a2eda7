//! Error types for the coupon core.

use thiserror::Error;

/// Errors that can occur while building filters or generating codes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The digest stream ran out before enough parts were accepted.
    #[error("digest stream exhausted after accepting {accepted} of {requested} parts")]
    DigestExhausted { accepted: usize, requested: usize },

    /// A bad-word list could not be compiled into a matcher.
    #[error("invalid bad-word pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Validation errors for user-supplied code text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("number of parts does not match: expected {expected}, found {found}")]
    PartCountMismatch { expected: usize, found: usize },

    #[error("invalid checksum in part {position}: {part}")]
    ChecksumMismatch { position: usize, part: String },
}

impl ValidationError {
    /// Whether the input had the wrong shape rather than a bad check symbol.
    pub fn is_part_count_mismatch(&self) -> bool {
        matches!(self, ValidationError::PartCountMismatch { .. })
    }

    /// Whether a part failed its check-symbol recomputation.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, ValidationError::ChecksumMismatch { .. })
    }
}
