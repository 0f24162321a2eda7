//! # coupon-cli
//!
//! Command-line front end for the `coupon` crate.
//!
//! ## Subcommands
//!
//! - `generate`: issue a batch of distinct codes
//! - `validate`: check typed-in codes and print their normalized form
//!
//! Argument parsing lives here; every decision about codes is made by the
//! `coupon` crate.

pub mod generate;
pub mod validate;
