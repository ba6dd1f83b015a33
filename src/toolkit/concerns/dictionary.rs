use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::warn;

use super::keywords::CONCERN_KEYWORDS;
use crate::GENERAL_SKIN_CARE;


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchMode {
    /// Plain substring containment; "oily" also fires inside "oilyness".
    #[default]
    Substring,
    /// Phrases must start and end on word boundaries.
    WordBoundary,
}


pub struct ConcernDictionary {
    mode: MatchMode,
    // One compiled pattern list per concern, parallel to CONCERN_KEYWORDS.
    patterns: Vec<Vec<Regex>>,
}

impl ConcernDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(MatchMode::Substring)
    }

    #[must_use]
    pub fn with_mode(mode: MatchMode) -> Self {
        let patterns = match mode {
            MatchMode::Substring => Vec::new(),
            MatchMode::WordBoundary => CONCERN_KEYWORDS
                .iter()
                .map(|(_, phrases)| compile_phrases(phrases))
                .collect(),
        };

        Self { mode, patterns }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Detects canonical concerns in `text`, in declaration order.
    ///
    /// Never empty: falls back to the sentinel `"general skin care"`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();

        let detected: Vec<String> = CONCERN_KEYWORDS
            .iter()
            .enumerate()
            .filter(|(idx, (_, phrases))| self.is_detected(*idx, phrases, &text_lower))
            .map(|(_, (concern, _))| (*concern).to_string())
            .collect();

        if detected.is_empty() {
            vec![GENERAL_SKIN_CARE.to_string()]
        } else {
            detected
        }
    }

    pub fn concerns(&self) -> impl Iterator<Item = &'static str> {
        CONCERN_KEYWORDS.iter().map(|(concern, _)| *concern)
    }

    pub fn phrases(&self, concern: &str) -> Option<&'static [&'static str]> {
        CONCERN_KEYWORDS
            .iter()
            .find(|(name, _)| *name == concern)
            .map(|(_, phrases)| *phrases)
    }

    fn is_detected(&self, idx: usize, phrases: &[&str], text_lower: &str) -> bool {
        match self.mode {
            MatchMode::Substring => phrases.iter().any(|phrase| text_lower.contains(phrase)),
            MatchMode::WordBoundary => self
                .patterns
                .get(idx)
                .is_some_and(|patterns| patterns.iter().any(|re| re.is_match(text_lower))),
        }
    }
}

impl Default for ConcernDictionary {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_phrases(phrases: &[&str]) -> Vec<Regex> {
    phrases
        .iter()
        .filter_map(|phrase| {
            let pattern = format!(r"\b{}\b", regex::escape(phrase));
            match Regex::new(&pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Skipping trigger phrase '{}': {}", phrase, e);
                    None
                }
            }
        })
        .collect()
}
