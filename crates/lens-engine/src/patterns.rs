//! Fixed vocabularies used by the analysis profiles
//!
//! Every label that can appear in a report's `keyTerms` or `risks` comes from
//! one of these tables. Table order is output order.

/// A (trigger substring, human-readable label) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTrigger {
    /// Lower-case substring searched for in the lower-cased text
    pub trigger: &'static str,
    pub label: &'static str,
}

impl RiskTrigger {
    pub const fn new(trigger: &'static str, label: &'static str) -> Self {
        Self { trigger, label }
    }
}

/// Risk triggers for the landing-page demo
pub const LANDING_RISKS: &[RiskTrigger] = &[
    RiskTrigger::new("perpetual", "Perpetual obligations"),
    RiskTrigger::new("irrevocable", "Irrevocable license or rights"),
    RiskTrigger::new("sole discretion", "Counterparty operates at sole discretion"),
    RiskTrigger::new("without notice", "Changes or termination without notice"),
    RiskTrigger::new("limitation of liability", "Limitation of liability"),
    RiskTrigger::new("liability is limited", "Liability limitation"),
    RiskTrigger::new("indemn", "Indemnification obligations"),
    RiskTrigger::new("non-exclusive", "Non-exclusive obligations/rights"),
];

/// Risk triggers for the standalone playground
pub const PLAYGROUND_RISKS: &[RiskTrigger] = &[
    RiskTrigger::new("perpetual", "Perpetual obligations"),
    RiskTrigger::new("irrevocable", "Irrevocable rights"),
    RiskTrigger::new("sole discretion", "Counterparty sole discretion"),
    RiskTrigger::new("without notice", "Changes without notice"),
    RiskTrigger::new("limitation of liability", "Liability limitations"),
    RiskTrigger::new("indemn", "Indemnification"),
];

/// Heading candidates for the landing-page demo
pub const LANDING_HEADINGS: &[&str] = &[
    "Term",
    "Payment",
    "Fees",
    "Confidential",
    "Liability",
    "Indemnification",
    "Termination",
    "Governing Law",
    "Arbitration",
    "Assignment",
    "Warranty",
    "License",
];

/// Heading candidates for the standalone playground
pub const PLAYGROUND_HEADINGS: &[&str] = &[
    "Term",
    "Payment",
    "Confidential",
    "Liability",
    "Indemnification",
    "Termination",
    "Governing Law",
    "Arbitration",
    "Assignment",
];

pub const LANDING_ACTIONS: &[&str] = &[
    "Validate that confidentiality obligations align with internal policy.",
    "Confirm termination notice period and cure rights.",
    "Ensure governing law and venue are acceptable.",
];

pub const PLAYGROUND_ACTIONS: &[&str] = &[
    "Review indemnification scope with legal counsel.",
    "Confirm termination notice period is acceptable.",
    "Verify governing law and venue match your preference.",
];
