//! Error types for the issuer.

use coupon_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors that can occur during issuer operations.
#[derive(Debug, Error)]
pub enum CouponError {
    /// Generation or filter construction failed.
    #[error("generation error: {0}")]
    Core(#[from] CoreError),

    /// Code text did not validate.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A freshly generated code failed its own validation.
    #[error("generated code {code} failed self-check: {source}")]
    SelfCheck {
        code: String,
        #[source]
        source: ValidationError,
    },

    /// A batch ran out of attempts before collecting enough unique codes.
    #[error("batch exhausted after {attempts} attempts: issued {issued} of {requested} codes")]
    BatchExhausted {
        issued: usize,
        requested: usize,
        attempts: usize,
    },
}

/// Result type for issuer operations.
pub type Result<T> = std::result::Result<T, CouponError>;
