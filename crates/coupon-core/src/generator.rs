//! Code generation: digest stream in, filtered parts out.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::alphabet::symbol_at;
use crate::badword::{BadWordFilter, BadWordPolicy};
use crate::digest::{DigestStream, Seed, DEFAULT_MAX_BLOCKS};
use crate::error::CoreError;
use crate::transposition::is_ambiguous;
use crate::types::{Code, Part, PartCount};

/// Configuration for a [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Requested part count. Clamped into 1..=6; values below 1 mean 3.
    pub num_parts: i64,
    /// Seed text. `None` or empty gives a fresh random code each call.
    pub seed: Option<String>,
    /// Which bad-word list to reject parts against.
    pub bad_words: BadWordPolicy,
    /// How many digest blocks a single code may draw.
    pub max_digest_blocks: usize,
}

impl GeneratorConfig {
    /// The clamped part count.
    pub fn part_count(&self) -> PartCount {
        PartCount::clamped(self.num_parts)
    }

    /// The seed this configuration describes.
    pub fn seed(&self) -> Seed {
        Seed::from(self.seed.clone())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_parts: PartCount::DEFAULT as i64,
            seed: None,
            bad_words: BadWordPolicy::Default,
            max_digest_blocks: DEFAULT_MAX_BLOCKS,
        }
    }
}

/// Why a candidate part was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BadWord,
    Transposition,
}

/// Builds codes from a seed.
///
/// Holds only read-only state, so one generator can serve many threads.
#[derive(Debug, Clone)]
pub struct Generator {
    filter: Arc<BadWordFilter>,
    max_blocks: usize,
}

impl Generator {
    /// Create a generator that rejects parts matching `filter`.
    pub fn new(filter: Arc<BadWordFilter>) -> Self {
        Self {
            filter,
            max_blocks: DEFAULT_MAX_BLOCKS,
        }
    }

    /// Create a generator from a configuration.
    ///
    /// The default policy reuses the process-wide filter instead of
    /// compiling a new one.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CoreError> {
        let filter = match &config.bad_words {
            BadWordPolicy::Default => BadWordFilter::shared_default(),
            policy => Arc::new(BadWordFilter::from_policy(policy)?),
        };
        Ok(Self::new(filter).with_max_blocks(config.max_digest_blocks))
    }

    /// Set how many digest blocks one code may draw.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks.max(1);
        self
    }

    /// How many digest blocks one code may draw.
    pub fn max_blocks(&self) -> usize {
        self.max_blocks
    }

    /// The bad-word filter in use.
    pub fn filter(&self) -> &Arc<BadWordFilter> {
        &self.filter
    }

    /// Generate a code with `parts` parts from `seed`.
    pub fn generate(&self, parts: PartCount, seed: &Seed) -> Result<Code, CoreError> {
        let mut stream = DigestStream::new(seed.resolve(), self.max_blocks);
        self.generate_from_stream(parts, &mut stream)
    }

    /// Generate a code and render it.
    pub fn generate_str(&self, parts: PartCount, seed: &Seed) -> Result<String, CoreError> {
        self.generate(parts, seed).map(|code| code.to_string())
    }

    /// Generate a code by drawing candidates from an existing stream.
    pub fn generate_from_stream(
        &self,
        parts: PartCount,
        stream: &mut DigestStream,
    ) -> Result<Code, CoreError> {
        let requested = parts.get();
        let mut accepted: Vec<Part> = Vec::with_capacity(requested);

        while accepted.len() < requested {
            let position = accepted.len() + 1;
            let indices = stream.next_triple().ok_or(CoreError::DigestExhausted {
                accepted: accepted.len(),
                requested,
            })?;
            let payload = indices.map(|i| symbol_at(i as usize));
            let part = Part::from_payload(payload, position);

            match self.screen(&part) {
                Some(reason) => {
                    tracing::trace!(part = %part, position, ?reason, "rejected candidate part");
                }
                None => accepted.push(part),
            }
        }

        let code = Code::from_parts(accepted);
        tracing::debug!(code = %code, consumed = stream.consumed(), "generated code");
        Ok(code)
    }

    /// Check a candidate against both filters.
    pub fn screen(&self, part: &Part) -> Option<Rejection> {
        if self.filter.matches(part.as_str()) {
            Some(Rejection::BadWord)
        } else if is_ambiguous(part.symbols(), part.position()) {
            Some(Rejection::Transposition)
        } else {
            None
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(BadWordFilter::shared_default())
    }
}

/// Generate one code from a configuration.
pub fn generate(config: &GeneratorConfig) -> Result<String, CoreError> {
    Generator::from_config(config)?.generate_str(config.part_count(), &config.seed())
}
