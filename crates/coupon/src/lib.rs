//! # Coupon
//!
//! The unified API for generating and checking coupon codes.
//!
//! ## Overview
//!
//! Codes look like `DPQD-Y328-40W2`: up to six four-symbol parts, each
//! ending in a check symbol that depends on the part's position. They are
//! built to survive being read aloud or retyped:
//!
//! - **No look-alikes**: `I`, `O`, `S` and `Z` are never generated, and are
//!   read back as `1`, `0`, `5` and `2`
//! - **Self-checking**: a typo in any single payload symbol breaks the check
//! - **Transposition-safe**: no adjacent swap inside a part yields another
//!   valid part
//! - **Clean**: parts that spell a blacklisted word are skipped
//!
//! Codes are verifiable offline. They are not secrets: anyone who knows the
//! scheme can produce valid codes.
//!
//! ## Usage
//!
//! ```rust
//! use coupon::{BatchRequest, Issuer, IssuerConfig};
//!
//! let issuer = Issuer::new(IssuerConfig::default()).unwrap();
//!
//! let code = issuer.generate_with_seed("hello").unwrap();
//! assert_eq!(code.to_string(), "AL67-WV5L-82T9");
//!
//! // Typed back in lowercase, with an S for the 5
//! assert!(issuer.validate("al67 wvsl 82t9").is_ok());
//!
//! let batch = issuer.issue_batch(&BatchRequest::new(10, "promo-")).unwrap();
//! assert_eq!(batch.len(), 10);
//! ```
//!
//! ## Re-exports
//!
//! - `coupon::core` - Alphabet, digest stream, check digits, filters

pub mod error;
pub mod issuer;

// Re-export component crate
pub use coupon_core as core;

// Re-export main types for convenience
pub use error::{CouponError, Result};
pub use issuer::{BatchRequest, Issuer, IssuerConfig};

// Re-export commonly used core types
pub use coupon_core::{
    validate_code, BadWordFilter, BadWordPolicy, Code, Generator, GeneratorConfig, Part,
    PartCount, Seed, Validator,
};
