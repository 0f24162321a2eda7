//! # Coupon Core
//!
//! Pure primitives for short, human-typeable coupon codes.
//!
//! This crate contains no I/O and no shared mutable state. Everything is
//! computation over a fixed alphabet and a seed-derived digest stream.
//!
//! ## Key Types
//!
//! - [`Code`] - One to six parts joined by `-`
//! - [`Part`] - Three payload symbols plus a positional check symbol
//! - [`Generator`] - Turns a [`Seed`] into a filtered [`Code`]
//! - [`Validator`] - Normalizes typed input and rechecks every part
//! - [`BadWordFilter`] - Rejects parts that spell something offensive
//!
//! ## Example
//!
//! ```rust
//! use coupon_core::{validate_code, Generator, PartCount, Seed};
//!
//! let generator = Generator::default();
//! let code = generator
//!     .generate(PartCount::default(), &Seed::from("test0"))
//!     .unwrap();
//! assert_eq!(code.to_string(), "DPQD-Y328-40W2");
//!
//! let checked = validate_code("dpqd y3z8 4ow2", PartCount::default()).unwrap();
//! assert_eq!(checked, code);
//! ```

pub mod alphabet;
pub mod badword;
pub mod check_digit;
pub mod digest;
pub mod error;
pub mod generator;
pub mod transposition;
pub mod types;
pub mod validation;

pub use alphabet::{normalize, ALPHABET_SIZE, SYMBOLS};
pub use badword::{BadWordFilter, BadWordPolicy};
pub use check_digit::check_digit;
pub use digest::{DigestStream, Seed};
pub use error::{CoreError, ValidationError};
pub use generator::{generate, Generator, GeneratorConfig, Rejection};
pub use transposition::is_ambiguous;
pub use types::{Code, Part, PartCount, PART_LEN, SEPARATOR};
pub use validation::{is_valid_code, validate_code, Validator};
