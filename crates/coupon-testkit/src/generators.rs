//! Proptest generators for property-based testing.

use proptest::prelude::*;

use coupon_core::alphabet::SYMBOLS;
use coupon_core::{Generator, PartCount, Seed};

/// Generate a non-empty seed string.
pub fn seed_text() -> impl Strategy<Value = String> {
    "[ -~]{1,32}".prop_map(String::from)
}

/// Generate a part count in 1..=6.
pub fn part_count() -> impl Strategy<Value = PartCount> {
    (PartCount::MIN..=PartCount::MAX).prop_map(|n| PartCount::clamped(n as i64))
}

/// Generate one alphabet symbol.
pub fn symbol() -> impl Strategy<Value = u8> {
    prop::sample::select(SYMBOLS.to_vec())
}

/// Generate a three-symbol payload.
pub fn payload() -> impl Strategy<Value = [u8; 3]> {
    prop::array::uniform3(symbol())
}

/// Generate a 1-based part position.
pub fn position() -> impl Strategy<Value = usize> {
    PartCount::MIN..=PartCount::MAX
}

/// Parameters for generating a code.
#[derive(Debug, Clone)]
pub struct CodeParams {
    pub seed: String,
    pub parts: PartCount,
}

impl Arbitrary for CodeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (seed_text(), part_count())
            .prop_map(|(seed, parts)| CodeParams { seed, parts })
            .boxed()
    }
}

/// Generate a code from parameters with the default generator.
pub fn code_from_params(params: &CodeParams) -> String {
    Generator::default()
        .generate_str(params.parts, &Seed::from(params.seed.as_str()))
        .expect("default digest budget covers six parts")
}
