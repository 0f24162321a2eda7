//! # Generate Subcommand
//!
//! Issues a batch of distinct codes, one per line.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use coupon::{BadWordPolicy, BatchRequest, Issuer, IssuerConfig};

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of distinct codes to print.
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Parts per code (1-6). Out-of-range values are clamped.
    #[arg(long, visible_alias = "part", allow_negative_numbers = true)]
    pub parts: Option<i64>,

    /// Seed text. Code `i` is seeded with `<text><i>`.
    #[arg(long, default_value = "")]
    pub text: String,

    /// Label prepended to every code as `<prefix>-<code>`.
    #[arg(long)]
    pub prefix: Option<String>,

    /// File of extra bad words, one per line (`#` starts a comment).
    #[arg(long)]
    pub bad_words_file: Option<PathBuf>,

    /// Use only the words from `--bad-words-file`.
    #[arg(long, requires = "bad_words_file")]
    pub replace_bad_words: bool,

    /// JSON issuer configuration. Flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Build the issuer configuration from the config file and flags.
    pub fn issuer_config(&self) -> anyhow::Result<IssuerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => IssuerConfig::default(),
        };

        if let Some(parts) = self.parts {
            config.generator.num_parts = parts;
        }

        if let Some(path) = &self.bad_words_file {
            let words = read_word_list(path)?;
            config.generator.bad_words = if self.replace_bad_words {
                BadWordPolicy::Replace(words)
            } else {
                BadWordPolicy::Append(words)
            };
        }

        Ok(config)
    }

    /// The batch this invocation asks for.
    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest {
            count: self.count,
            seed_text: self.text.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

/// Read an issuer configuration from a JSON file.
pub fn load_config(path: &Path) -> anyhow::Result<IssuerConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Read a bad-word list: one word per line, blank lines and `#` comments skipped.
pub fn read_word_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(parse_word_list(&raw))
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the subcommand, writing codes to `out`. Returns how many were written.
pub fn run(args: &GenerateArgs, out: &mut impl Write) -> anyhow::Result<usize> {
    let config = args.issuer_config()?;
    tracing::debug!(?config, "issuer configuration");

    let issuer = Issuer::new(config)?;
    let codes = issuer.issue_batch(&args.batch_request())?;
    for code in &codes {
        writeln!(out, "{}", code)?;
    }
    Ok(codes.len())
}
