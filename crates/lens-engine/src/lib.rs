//! JurisLens analysis engine
//!
//! Turns raw legal text into an [`AnalysisReport`]: the first few sentences
//! as a summary, heading-like key terms, keyword risk flags and a fixed list
//! of recommended actions. Everything here is a deterministic heuristic; no
//! claim of legal correctness is made.

pub mod export;
pub mod input;
pub mod patterns;
pub mod profile;
pub mod render;
pub mod rules;
pub mod segment;

use lazy_static::lazy_static;
use tracing::debug;

pub use profile::{AnalyzerProfile, DetectionMode, EmptyStateText, Profile, ProfileError};
pub use shared_types::AnalysisReport;

use rules::key_terms::KeyTermMatcher;

lazy_static! {
    static ref LANDING_ANALYZER: TextAnalyzer = TextAnalyzer::new(Profile::Landing);
    static ref PLAYGROUND_ANALYZER: TextAnalyzer = TextAnalyzer::new(Profile::Playground);
}

/// Analyze `text` with one of the named profiles
pub fn analyze(text: &str, profile: Profile) -> AnalysisReport {
    match profile {
        Profile::Landing => LANDING_ANALYZER.analyze(text),
        Profile::Playground => PLAYGROUND_ANALYZER.analyze(text),
    }
}

/// Configurable analyzer. Holds compiled key-term matchers for its profile.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: &'static AnalyzerProfile,
    key_terms: KeyTermMatcher,
}

impl TextAnalyzer {
    pub fn new(profile: Profile) -> Self {
        Self::with_config(profile.config())
    }

    pub fn with_config(config: &'static AnalyzerProfile) -> Self {
        Self {
            config,
            key_terms: KeyTermMatcher::new(config.heading_candidates, config.detection),
        }
    }

    pub fn config(&self) -> &'static AnalyzerProfile {
        self.config
    }

    /// Build a report for `text`. Never fails; empty input degrades to empty
    /// fields plus the static actions.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let normalized;
        let body: &str = if self.config.normalize_whitespace {
            normalized = segment::normalize_whitespace(text);
            &normalized
        } else {
            text
        };

        let sentences = segment::split_sentences(body, !self.config.normalize_whitespace);
        let summary = segment::summarize(&sentences);
        let risks = rules::risks::detect_risks(body, self.config.risk_table);
        // Headings are looked up in the original text so line starts survive
        let key_terms = self.key_terms.detect(text);

        debug!(
            "Analyzed {} chars: {} sentences, {} key terms, {} risks",
            text.len(),
            sentences.len(),
            key_terms.len(),
            risks.len()
        );

        AnalysisReport {
            summary,
            key_terms,
            risks,
            actions: self.config.actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{LANDING_ACTIONS, PLAYGROUND_ACTIONS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_only_actions() {
        for profile in Profile::ALL {
            let report = analyze("", profile);
            assert_eq!(report.summary, "");
            assert!(report.key_terms.is_empty());
            assert!(report.risks.is_empty());
            assert!(!report.actions.is_empty());
        }
    }

    #[test]
    fn test_actions_are_profile_specific_and_static() {
        let landing = analyze("Anything at all.", Profile::Landing);
        let playground = analyze("Something else entirely!", Profile::Playground);
        assert_eq!(landing.actions, LANDING_ACTIONS.to_vec());
        assert_eq!(playground.actions, PLAYGROUND_ACTIONS.to_vec());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let text = "Term: one year.\nIndemnification applies. Fees are perpetual.";
        for profile in Profile::ALL {
            assert_eq!(analyze(text, profile), analyze(text, profile));
        }
    }

    #[test]
    fn test_summary_truncates_to_three_sentences() {
        let text = "One is first. Two is second. Three is third. Four is fourth. Five is fifth.";
        for profile in Profile::ALL {
            assert_eq!(
                analyze(text, profile).summary,
                "One is first. Two is second. Three is third."
            );
        }
    }

    #[test]
    fn test_landing_normalizes_whitespace_in_summary() {
        let text = "  First\n   line.\n\nSecond\tline.  ";
        assert_eq!(analyze(text, Profile::Landing).summary, "First line. Second line.");
    }

    #[test]
    fn test_playground_keeps_raw_sentences() {
        let text = "First\nline.\n\nSecond line.";
        assert_eq!(analyze(text, Profile::Playground).summary, "First\nline. Second line.");
    }

    #[test]
    fn test_indemnification_flags_indemn_label() {
        let text = "Each party accepts INDEMNIFICATION duties.";
        assert!(analyze(text, Profile::Landing)
            .risks
            .contains(&"Indemnification obligations".to_string()));
        assert!(analyze(text, Profile::Playground)
            .risks
            .contains(&"Indemnification".to_string()));
    }

    #[test]
    fn test_governing_law_divergence_between_profiles() {
        let heading = "Preamble.\nGoverning Law: Delaware.";
        assert!(analyze(heading, Profile::Landing)
            .key_terms
            .contains(&"Governing Law".to_string()));
        assert!(analyze(heading, Profile::Playground)
            .key_terms
            .contains(&"Governing Law".to_string()));

        let embedded = "This is not a Governing Law clause.";
        assert!(!analyze(embedded, Profile::Landing)
            .key_terms
            .contains(&"Governing Law".to_string()));
        assert!(analyze(embedded, Profile::Playground)
            .key_terms
            .contains(&"Governing Law".to_string()));
    }

    #[test]
    fn test_key_terms_ignore_non_ascii_case_folding() {
        assert_eq!(
            analyze("The Termé applies here.", Profile::Playground).key_terms,
            vec!["Term"]
        );
        assert!(analyze("see Licenſe and Aſſignment", Profile::Playground)
            .key_terms
            .is_empty());
        assert!(analyze("Preamble.\nFeeſ: 10", Profile::Landing).key_terms.is_empty());
    }

    #[test]
    fn test_landing_headings_use_original_line_breaks() {
        // Normalization would put "Payment" mid-line; detection must not see that copy
        let text = "Intro text.\nPayment: net 30.";
        assert_eq!(analyze(text, Profile::Landing).key_terms, vec!["Payment"]);
    }

    #[test]
    fn test_sample_text_report() {
        let report = analyze(input::SAMPLE_TEXT, Profile::Landing);
        assert_eq!(
            report.risks,
            vec![
                "Limitation of liability",
                "Liability limitation",
                "Indemnification obligations",
                "Non-exclusive obligations/rights",
            ]
        );
        assert!(report.summary.starts_with("This Non-Disclosure Agreement"));
        assert!(report.summary.ends_with("days' written notice."));
        // The sample is one line, so nothing sits at a line start except the first word
        assert!(report.key_terms.is_empty());
    }

    #[test]
    fn test_custom_config() {
        static CUSTOM: AnalyzerProfile = AnalyzerProfile {
            heading_candidates: &["Schedule"],
            ..profile::PLAYGROUND
        };
        let analyzer = TextAnalyzer::with_config(&CUSTOM);
        let report = analyzer.analyze("See the schedule below.");
        assert_eq!(report.key_terms, vec!["Schedule"]);
        assert_eq!(analyzer.config().detection, DetectionMode::WordBoundary);
    }
}
