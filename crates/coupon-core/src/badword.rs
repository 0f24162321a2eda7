//! Bad-word filter for generated parts.
//!
//! The default list is stored ROT13-encoded and decoded once when the shared
//! matcher is first built. Every word is expanded so that the letter/digit
//! look-alikes `I/1`, `O/0`, `S/5` and `Z/2` match each other.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

use crate::error::CoreError;

const ENCODED_WORDS: [&str; 28] = [
    "SHPX", "PHAG", "JNAX", "JNAT", "CVFF", "PBPX", "FUVG", "GJNG", "GVGF", "SNEG", "URYY", "ZHSS",
    "QVPX", "XABO", "NEFR", "FUNT", "GBFF", "FYHG", "GHEQ", "FYNT", "PENC", "CBBC", "OHGG", "SRPX",
    "OBBO", "WVFZ", "WVMM", "CUNG",
];

const EQUIVALENCE_CLASSES: [(&[u8], &str); 4] = [
    (b"I1", "[I1]"),
    (b"O0", "[O0]"),
    (b"S5", "[S5]"),
    (b"Z2", "[Z2]"),
];

/// How a generator picks its bad-word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "words")]
pub enum BadWordPolicy {
    /// The built-in list.
    #[default]
    Default,
    /// The built-in list plus these words.
    Append(Vec<String>),
    /// Only these words. An empty list matches nothing.
    Replace(Vec<String>),
}

/// Compiled matcher that rejects offensive parts.
#[derive(Debug, Clone)]
pub struct BadWordFilter {
    pattern: Option<Regex>,
}

impl BadWordFilter {
    /// Build a filter from a word list.
    pub fn from_words<I, S>(words: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|w| expand_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        if alternatives.is_empty() {
            return Ok(Self::none());
        }
        let pattern = Regex::new(&format!("^(?:{})$", alternatives.join("|")))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Build a filter according to `policy`.
    pub fn from_policy(policy: &BadWordPolicy) -> Result<Self, CoreError> {
        match policy {
            BadWordPolicy::Default => Self::from_words(default_words()),
            BadWordPolicy::Append(extra) => Self::from_words(
                default_words()
                    .into_iter()
                    .chain(extra.iter().cloned()),
            ),
            BadWordPolicy::Replace(words) => Self::from_words(words),
        }
    }

    /// Use a caller-supplied matcher as is.
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    /// A filter that accepts everything.
    pub fn none() -> Self {
        Self { pattern: None }
    }

    /// The process-wide default filter, built on first use.
    pub fn shared_default() -> Arc<BadWordFilter> {
        static DEFAULT: OnceLock<Arc<BadWordFilter>> = OnceLock::new();
        Arc::clone(DEFAULT.get_or_init(|| {
            let filter = BadWordFilter::from_words(default_words())
                .expect("built-in bad-word list compiles");
            Arc::new(filter)
        }))
    }

    /// Whether `part` is on the list.
    pub fn matches(&self, part: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(part))
    }

    /// The compiled pattern, if any.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

impl Default for BadWordFilter {
    fn default() -> Self {
        BadWordFilter::shared_default().as_ref().clone()
    }
}

/// The built-in list, decoded.
pub fn default_words() -> Vec<String> {
    ENCODED_WORDS.iter().map(|w| rot13(w)).collect()
}

fn rot13(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            _ => c,
        })
        .collect()
}

/// Turn one word into a regex alternative with look-alike classes.
fn expand_word(word: &str) -> String {
    let mut out = String::new();
    for c in word.trim().chars().flat_map(char::to_uppercase) {
        let class = EQUIVALENCE_CLASSES
            .iter()
            .find(|(members, _)| c.is_ascii() && members.contains(&(c as u8)));
        match class {
            Some((_, class)) => out.push_str(class),
            None => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out
}
