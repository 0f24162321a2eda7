//! # Coupon Testkit
//!
//! Testing utilities for coupon codes.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Seeds with their expected codes, pinning the whole
//!   encoding scheme
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A ready-made issuer and helpers that simulate
//!   transcription mistakes
//!
//! ## Golden Vectors
//!
//! ```rust
//! use coupon_testkit::vectors::{all_vectors, generate_from_vector};
//!
//! for vector in all_vectors() {
//!     let code = generate_from_vector(&vector).unwrap();
//!     assert_eq!(code, vector.expected, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use coupon_testkit::generators::{code_from_params, CodeParams};
//!
//! proptest! {
//!     #[test]
//!     fn code_is_deterministic(params: CodeParams) {
//!         prop_assert_eq!(code_from_params(&params), code_from_params(&params));
//!     }
//! }
//! ```
//!
//! ## Transcription Errors
//!
//! ```rust
//! use coupon_testkit::fixtures::{confusable_variant, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let code = fixture.code("welcome");
//! assert!(fixture.issuer.validate(&confusable_variant(&code)).is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{code_from_params, CodeParams};
pub use vectors::{all_vectors, generate_from_vector, verify_all_vectors, GoldenVector};
