//! Analyzer profiles
//!
//! The landing-page demo and the playground disagree on vocabulary, on
//! whitespace handling and on how headings are recognised. Both behaviours
//! are kept as named profiles over one analyzer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::patterns::{
    RiskTrigger, LANDING_ACTIONS, LANDING_HEADINGS, LANDING_RISKS, PLAYGROUND_ACTIONS,
    PLAYGROUND_HEADINGS, PLAYGROUND_RISKS,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown profile '{0}'. Use 'landing' or 'playground'")]
    Unknown(String),
}

/// How heading candidates are located in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Start of text or line, optional leading whitespace, then a non-letter or end
    HeadingAnchored,
    /// Case-insensitive whole word anywhere
    WordBoundary,
}

/// Messages shown in place of an empty tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateText {
    pub summary: &'static str,
    pub key_terms: &'static str,
    pub risks: &'static str,
    /// Placeholder before any analysis has run
    pub no_report: &'static str,
}

/// Complete analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerProfile {
    pub normalize_whitespace: bool,
    pub detection: DetectionMode,
    pub risk_table: &'static [RiskTrigger],
    pub heading_candidates: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub empty_text: EmptyStateText,
}

pub const LANDING: AnalyzerProfile = AnalyzerProfile {
    normalize_whitespace: true,
    detection: DetectionMode::HeadingAnchored,
    risk_table: LANDING_RISKS,
    heading_candidates: LANDING_HEADINGS,
    actions: LANDING_ACTIONS,
    empty_text: EmptyStateText {
        summary: "No summary detected.",
        key_terms: "No explicit headings detected.",
        risks: "No obvious red flags found.",
        no_report: "Run an analysis to see the summary, key terms, risks, and action items.",
    },
};

pub const PLAYGROUND: AnalyzerProfile = AnalyzerProfile {
    normalize_whitespace: false,
    detection: DetectionMode::WordBoundary,
    risk_table: PLAYGROUND_RISKS,
    heading_candidates: PLAYGROUND_HEADINGS,
    actions: PLAYGROUND_ACTIONS,
    empty_text: EmptyStateText {
        summary: "No summary found.",
        key_terms: "No explicit headings detected.",
        risks: "No red flags found.",
        no_report: "Run an analysis to see results.",
    },
};

/// Named analyzer configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Landing-page demo
    #[default]
    Landing,
    /// Standalone playground
    Playground,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Landing, Profile::Playground];

    pub fn config(&self) -> &'static AnalyzerProfile {
        match self {
            Profile::Landing => &LANDING,
            Profile::Playground => &PLAYGROUND,
        }
    }

    /// Identifier used on the command line and at the wasm boundary
    pub fn id(&self) -> &'static str {
        match self {
            Profile::Landing => "landing",
            Profile::Playground => "playground",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Landing => "Normalized text, heading-anchored key terms",
            Profile::Playground => "Raw text, whole-word key terms",
        }
    }

    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "landing" | "index" | "home" => Some(Profile::Landing),
            "playground" => Some(Profile::Playground),
            _ => None,
        }
    }
}

impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::parse_name(s).ok_or_else(|| ProfileError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_names() {
        assert_eq!(Profile::parse_name("landing"), Some(Profile::Landing));
        assert_eq!(Profile::parse_name("HOME"), Some(Profile::Landing));
        assert_eq!(Profile::parse_name(" Playground "), Some(Profile::Playground));
        assert_eq!(Profile::parse_name("sandbox"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "sandbox".parse::<Profile>().unwrap_err();
        assert_eq!(err, ProfileError::Unknown("sandbox".to_string()));
        assert!(err.to_string().contains("sandbox"));
    }

    #[test]
    fn test_profiles_keep_distinct_detection_modes() {
        assert_eq!(Profile::Landing.config().detection, DetectionMode::HeadingAnchored);
        assert_eq!(Profile::Playground.config().detection, DetectionMode::WordBoundary);
        assert!(Profile::Landing.config().normalize_whitespace);
        assert!(!Profile::Playground.config().normalize_whitespace);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }
}
