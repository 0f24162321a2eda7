//! Test fixtures and transcription-error helpers.
//!
//! Each helper mimics a mistake a person makes when copying a code by hand.

use coupon::{Issuer, IssuerConfig};
use coupon_core::alphabet::{CONFUSABLES, SYMBOLS};
use coupon_core::{GeneratorConfig, PartCount, SEPARATOR};

/// A test fixture with a deterministic issuer.
pub struct TestFixture {
    pub issuer: Issuer,
    pub seed: String,
}

impl TestFixture {
    /// An issuer with the default three parts and a fixed seed.
    pub fn new() -> Self {
        Self::with_parts(PartCount::default())
    }

    /// An issuer producing `parts` parts.
    pub fn with_parts(parts: PartCount) -> Self {
        let seed = "fixture".to_string();
        let config = IssuerConfig {
            generator: GeneratorConfig {
                num_parts: parts.get() as i64,
                seed: Some(seed.clone()),
                ..Default::default()
            },
            ..Default::default()
        };
        let issuer = Issuer::new(config).expect("default fixture config is valid");
        Self { issuer, seed }
    }

    /// The fixture's part count.
    pub fn parts(&self) -> PartCount {
        self.issuer.parts()
    }

    /// A code for `seed`, rendered.
    pub fn code(&self, seed: &str) -> String {
        self.issuer
            .generate_with_seed(seed)
            .expect("fixture generation succeeds")
            .to_string()
    }

    /// `count` distinct codes.
    pub fn codes(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| self.code(&format!("{}{}", self.seed, i)))
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every digit that has a look-alike letter with that letter.
pub fn confusable_variant(code: &str) -> String {
    code.chars()
        .map(|c| {
            CONFUSABLES
                .iter()
                .find(|(_, digit)| *digit as char == c)
                .map_or(c, |(alias, _)| *alias as char)
        })
        .collect()
}

/// Lowercase the code and use spaces instead of separators.
pub fn sloppy_variant(code: &str) -> String {
    code.to_ascii_lowercase().replace(SEPARATOR, " ")
}

/// Swap the symbol at `index` with the one after it, ignoring separators.
///
/// `index` counts symbols, not characters of the rendered code.
pub fn swap_adjacent(code: &str, index: usize) -> String {
    let mut symbols: Vec<char> = code.chars().filter(|&c| c != SEPARATOR).collect();
    symbols.swap(index, index + 1);
    regroup(&symbols)
}

/// Replace the symbol at `index` (ignoring separators) with `symbol`.
pub fn substitute(code: &str, index: usize, symbol: char) -> String {
    let mut symbols: Vec<char> = code.chars().filter(|&c| c != SEPARATOR).collect();
    symbols[index] = symbol;
    regroup(&symbols)
}

/// All alphabet symbols other than `current`.
pub fn other_symbols(current: char) -> impl Iterator<Item = char> {
    SYMBOLS
        .iter()
        .map(|&s| s as char)
        .filter(move |&s| s != current)
}

fn regroup(symbols: &[char]) -> String {
    symbols
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
