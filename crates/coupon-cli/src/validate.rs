//! # Validate Subcommand
//!
//! Checks typed-in codes and prints their normalized form.

use std::io::Write;

use clap::Args;
use coupon::{validate_code, PartCount};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Expected parts per code (1-6). Out-of-range values are clamped.
    #[arg(long, visible_alias = "part", default_value_t = 3, allow_negative_numbers = true)]
    pub parts: i64,

    /// Codes to check.
    #[arg(required = true)]
    pub codes: Vec<String>,
}

/// Run the subcommand. Returns whether every code was valid.
///
/// Valid codes print as `<normalized>`; invalid ones as `<input>: <error>`.
pub fn run(args: &ValidateArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let parts = PartCount::clamped(args.parts);
    let mut all_valid = true;

    for text in &args.codes {
        match validate_code(text, parts) {
            Ok(code) => writeln!(out, "{}", code)?,
            Err(e) => {
                tracing::debug!(input = %text, error = %e, "code rejected");
                writeln!(out, "{}: {}", text, e)?;
                all_valid = false;
            }
        }
    }

    Ok(all_valid)
}
