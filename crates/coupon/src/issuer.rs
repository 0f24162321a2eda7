//! The Issuer: a configured generator and validator pair.
//!
//! One issuer owns one bad-word filter and one expected part count, and
//! uses them for every code it generates, checks, or batches.

use std::collections::HashSet;

use coupon_core::{Code, Generator, GeneratorConfig, PartCount, Seed, Validator};
use serde::{Deserialize, Serialize};

use crate::error::{CouponError, Result};

/// Configuration for the Issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    /// Generator settings: part count, seed, bad words, digest limit.
    pub generator: GeneratorConfig,
    /// Whether every issued code is run back through the validator.
    pub validate_on_issue: bool,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            validate_on_issue: true,
        }
    }
}

/// Parameters for issuing a batch of distinct codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
    /// How many distinct codes to issue.
    pub count: usize,
    /// Seed prefix. Attempt `i` is seeded with `"{seed_text}{i}"`.
    pub seed_text: String,
    /// Optional label prepended as `"{prefix}-{code}"`.
    pub prefix: Option<String>,
}

impl BatchRequest {
    /// A request for `count` codes seeded from `seed_text`.
    pub fn new(count: usize, seed_text: impl Into<String>) -> Self {
        Self {
            count,
            seed_text: seed_text.into(),
            prefix: None,
        }
    }

    /// Prepend `prefix` to every issued code.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Upper bound on generation attempts for this request.
    pub fn max_attempts(&self) -> usize {
        self.count.saturating_mul(16).saturating_add(64)
    }
}

/// Issues and checks coupon codes.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Issuer {
    generator: Generator,
    parts: PartCount,
    seed: Seed,
    config: IssuerConfig,
}

impl Issuer {
    /// Create an issuer, compiling its bad-word filter.
    pub fn new(config: IssuerConfig) -> Result<Self> {
        let generator = Generator::from_config(&config.generator)?;
        Ok(Self {
            generator,
            parts: config.generator.part_count(),
            seed: config.generator.seed(),
            config,
        })
    }

    /// Create an issuer around an existing generator.
    ///
    /// The recorded config carries the part count and digest limit. Its
    /// `bad_words` stays at the default policy because a compiled filter
    /// cannot be turned back into a word list; use `generator().filter()`
    /// for the filter actually in use.
    pub fn with_generator(generator: Generator, parts: PartCount) -> Self {
        let mut config = IssuerConfig::default();
        config.generator.num_parts = parts.get() as i64;
        config.generator.max_digest_blocks = generator.max_blocks();
        Self {
            generator,
            parts,
            seed: Seed::Random,
            config,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// The part count every code from this issuer has.
    pub fn parts(&self) -> PartCount {
        self.parts
    }

    /// The underlying generator.
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// A validator expecting this issuer's part count.
    pub fn validator(&self) -> Validator {
        Validator::new(self.parts)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate a code from the configured seed.
    pub fn generate(&self) -> Result<Code> {
        self.issue(&self.seed)
    }

    /// Generate a code from an explicit seed.
    pub fn generate_with_seed(&self, seed: impl Into<Seed>) -> Result<Code> {
        self.issue(&seed.into())
    }

    fn issue(&self, seed: &Seed) -> Result<Code> {
        let code = self.generator.generate(self.parts, seed)?;
        if self.config.validate_on_issue {
            self.self_check(&code)?;
        }
        Ok(code)
    }

    fn self_check(&self, code: &Code) -> Result<()> {
        let rendered = code.to_string();
        self.validator()
            .validate(&rendered)
            .map(|_| ())
            .map_err(|source| CouponError::SelfCheck {
                code: rendered,
                source,
            })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate typed input and return the normalized code.
    pub fn validate(&self, text: &str) -> Result<Code> {
        Ok(self.validator().validate(text)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Batches
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue `request.count` distinct codes in first-issued order.
    ///
    /// Attempt `i` is seeded with `"{seed_text}{i}"`, so the same request
    /// always yields the same batch. Duplicates are skipped; if the attempt
    /// cap is reached first, the batch fails.
    pub fn issue_batch(&self, request: &BatchRequest) -> Result<Vec<String>> {
        let max_attempts = request.max_attempts();
        let mut seen: HashSet<String> = HashSet::with_capacity(request.count);
        let mut issued = Vec::with_capacity(request.count);
        let mut attempts = 0;

        while issued.len() < request.count {
            if attempts >= max_attempts {
                tracing::warn!(
                    issued = issued.len(),
                    requested = request.count,
                    attempts,
                    "batch attempt cap reached"
                );
                return Err(CouponError::BatchExhausted {
                    issued: issued.len(),
                    requested: request.count,
                    attempts,
                });
            }

            let seed = Seed::Text(format!("{}{}", request.seed_text, attempts));
            attempts += 1;

            let code = self.issue(&seed)?.to_string();
            let rendered = match &request.prefix {
                Some(prefix) if !prefix.is_empty() => format!("{}-{}", prefix, code),
                _ => code,
            };

            if seen.insert(rendered.clone()) {
                issued.push(rendered);
            } else {
                tracing::debug!(code = %rendered, attempts, "duplicate code skipped");
            }
        }

        tracing::debug!(count = issued.len(), attempts, "batch issued");
        Ok(issued)
    }
}

impl Default for Issuer {
    fn default() -> Self {
        Self::with_generator(Generator::default(), PartCount::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use coupon_core::{BadWordFilter, BadWordPolicy, CoreError, ValidationError};

    fn issuer_with(config: GeneratorConfig) -> Issuer {
        Issuer::new(IssuerConfig {
            generator: config,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_generate_configured_seed() {
        let issuer = issuer_with(GeneratorConfig {
            seed: Some("coupon".into()),
            ..Default::default()
        });
        assert_eq!(issuer.generate().unwrap().to_string(), "K87M-AJ5B-GPX4");
        assert_eq!(issuer.generate().unwrap().to_string(), "K87M-AJ5B-GPX4");
    }

    #[test]
    fn test_generate_with_seed() {
        let issuer = Issuer::default();
        let code = issuer.generate_with_seed("hello").unwrap();
        assert_eq!(code.to_string(), "AL67-WV5L-82T9");
    }

    #[test]
    fn test_validate() {
        let issuer = Issuer::default();
        assert_eq!(
            issuer.validate("al67 wv5l 82t9").unwrap().to_string(),
            "AL67-WV5L-82T9"
        );
        assert!(matches!(
            issuer.validate("AL67-WV5L"),
            Err(CouponError::Validation(
                ValidationError::PartCountMismatch { .. }
            ))
        ));
    }

    #[test]
    fn test_batch_is_deterministic_and_unique() {
        let issuer = Issuer::default();
        let request = BatchRequest::new(25, "spring-sale-");
        let a = issuer.issue_batch(&request).unwrap();
        let b = issuer.issue_batch(&request).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        let unique: HashSet<&String> = a.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn test_batch_first_code_uses_attempt_zero() {
        let issuer = Issuer::default();
        let batch = issuer.issue_batch(&BatchRequest::new(2, "test")).unwrap();
        assert_eq!(batch[0], "DPQD-Y328-40W2");
        assert_eq!(batch[1], "61YK-8NPP-MXTJ");
    }

    #[test]
    fn test_batch_prefix() {
        let issuer = Issuer::default();
        let batch = issuer
            .issue_batch(&BatchRequest::new(1, "test").with_prefix("XMAS"))
            .unwrap();
        assert_eq!(batch, vec!["XMAS-DPQD-Y328-40W2".to_string()]);
    }

    #[test]
    fn test_batch_zero() {
        let issuer = Issuer::default();
        assert!(issuer
            .issue_batch(&BatchRequest::new(0, "x"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_batch_exhausted() {
        // A single-part code has at most 32^3 payloads; asking for more
        // codes than the attempt cap allows cannot succeed.
        let issuer = issuer_with(GeneratorConfig {
            num_parts: 1,
            ..Default::default()
        });
        let request = BatchRequest {
            count: 40_000,
            seed_text: "many".into(),
            prefix: None,
        };
        assert!(matches!(
            issuer.issue_batch(&request),
            Err(CouponError::BatchExhausted {
                requested: 40_000,
                ..
            })
        ));
    }

    #[test]
    fn test_digest_exhaustion_surfaces() {
        let issuer = issuer_with(GeneratorConfig {
            num_parts: 6,
            seed: Some("test0".into()),
            max_digest_blocks: 1,
            ..Default::default()
        });
        assert!(matches!(
            issuer.generate(),
            Err(CouponError::Core(CoreError::DigestExhausted { .. }))
        ));
    }

    #[test]
    fn test_with_generator_records_settings() {
        let filter = Arc::new(BadWordFilter::from_words(["DPQD"]).unwrap());
        let generator = Generator::new(filter).with_max_blocks(2);
        let issuer = Issuer::with_generator(generator, PartCount::new(4).unwrap());

        let config = issuer.config();
        assert_eq!(config.generator.num_parts, 4);
        assert_eq!(config.generator.max_digest_blocks, 2);
        assert!(config.validate_on_issue);
        assert!(issuer.generator().filter().matches("DPQD"));

        let code = issuer.generate_with_seed("test0").unwrap();
        assert_eq!(code.to_string(), "Y32W-40WP-4G3Q-VJKH");
    }

    #[test]
    fn test_replace_policy() {
        let issuer = issuer_with(GeneratorConfig {
            num_parts: 1,
            seed: Some("test0".into()),
            bad_words: BadWordPolicy::Replace(vec!["DPQD".into()]),
            ..Default::default()
        });
        assert_eq!(issuer.generate().unwrap().to_string(), "Y32W");
    }

    #[test]
    fn test_concurrent_use() {
        let issuer = std::sync::Arc::new(Issuer::default());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let issuer = std::sync::Arc::clone(&issuer);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            let code = issuer.generate_with_seed(format!("t{}-{}", t, i)).unwrap();
                            issuer.validate(&code.to_string()).unwrap()
                        })
                        .count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 50);
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: IssuerConfig = serde_json::from_str(
            r#"{"generator":{"num_parts":2,"bad_words":{"mode":"append","words":["ABCD"]}}}"#,
        )
        .unwrap();
        assert!(config.validate_on_issue);
        let issuer = Issuer::new(config).unwrap();
        assert_eq!(issuer.parts().get(), 2);
    }
}
