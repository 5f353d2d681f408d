//! Heading and key-term detection
//!
//! Candidates are matched case-insensitively against the original text,
//! never the normalized copy, so line structure is still visible to the
//! heading-anchored mode.

use regex::Regex;

use crate::profile::DetectionMode;

/// Pattern for one candidate under the given mode.
///
/// Case folding and word boundaries are ASCII-only: "Termé" still contains
/// the word "Term", and "ſ" does not fold to "s". Candidates are ASCII.
pub fn candidate_pattern(candidate: &str, mode: DetectionMode) -> String {
    let escaped = regex::escape(candidate);
    match mode {
        // `^` without multi-line mode only anchors at the start of the text;
        // later lines are reached through the explicit line-break alternatives.
        DetectionMode::HeadingAnchored => {
            format!(r"(?:^|\n|\r)\s*(?i-u:{})(?:[^A-Za-z]|$)", escaped)
        }
        DetectionMode::WordBoundary => format!(r"(?-u:\b)(?i-u:{})(?-u:\b)", escaped),
    }
}

/// Compiled matchers for an ordered list of heading candidates
#[derive(Debug, Clone)]
pub struct KeyTermMatcher {
    matchers: Vec<(&'static str, Regex)>,
}

impl KeyTermMatcher {
    pub fn new(candidates: &[&'static str], mode: DetectionMode) -> Self {
        let matchers = candidates
            .iter()
            .filter_map(|&candidate| {
                match Regex::new(&candidate_pattern(candidate, mode)) {
                    Ok(re) => Some((candidate, re)),
                    Err(e) => {
                        tracing::warn!("Skipping heading candidate {:?}: {}", candidate, e);
                        None
                    }
                }
            })
            .collect();

        Self { matchers }
    }

    /// Candidates found in `text`, in candidate-list order
    pub fn detect(&self, text: &str) -> Vec<String> {
        self.matchers
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(candidate, _)| candidate.to_string())
            .collect()
    }
}
