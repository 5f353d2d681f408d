//! Tabbed presentation of a report

use std::fmt::Write;

use shared_types::AnalysisReport;

use crate::profile::{AnalyzerProfile, EmptyStateText};

pub const DISCLAIMER: &str =
    "This tool provides automated analysis to aid understanding and does not constitute legal advice.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportTab {
    #[default]
    Summary,
    KeyTerms,
    Risks,
    Actions,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Summary,
        ReportTab::KeyTerms,
        ReportTab::Risks,
        ReportTab::Actions,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportTab::Summary => "summary",
            ReportTab::KeyTerms => "terms",
            ReportTab::Risks => "risks",
            ReportTab::Actions => "actions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportTab::Summary => "Summary",
            ReportTab::KeyTerms => "Key Terms",
            ReportTab::Risks => "Risks",
            ReportTab::Actions => "Actions",
        }
    }

    pub fn parse_id(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Some(ReportTab::Summary),
            "terms" | "key_terms" | "keyterms" => Some(ReportTab::KeyTerms),
            "risks" => Some(ReportTab::Risks),
            "actions" => Some(ReportTab::Actions),
            _ => None,
        }
    }
}

/// Lines shown under `tab`. Empty sections collapse to the profile's message.
pub fn tab_items(report: &AnalysisReport, tab: ReportTab, empty: &EmptyStateText) -> Vec<String> {
    fn or_message(items: &[String], message: &str) -> Vec<String> {
        if items.is_empty() {
            vec![message.to_string()]
        } else {
            items.to_vec()
        }
    }

    match tab {
        ReportTab::Summary if report.summary.is_empty() => vec![empty.summary.to_string()],
        ReportTab::Summary => vec![report.summary.clone()],
        ReportTab::KeyTerms => or_message(&report.key_terms, empty.key_terms),
        ReportTab::Risks => or_message(&report.risks, empty.risks),
        ReportTab::Actions => report.actions.clone(),
    }
}

/// Plain-text rendering of every tab followed by the disclaimer
pub fn render_text(report: &AnalysisReport, profile: &AnalyzerProfile) -> String {
    let mut out = String::new();

    for tab in ReportTab::ALL {
        let _ = writeln!(out, "{}", tab.title());
        let _ = writeln!(out, "{}", "-".repeat(tab.title().len()));
        let items = tab_items(report, tab, &profile.empty_text);
        if tab == ReportTab::Summary {
            for line in items {
                let _ = writeln!(out, "{}", line);
            }
        } else {
            for item in items {
                let _ = writeln!(out, "  - {}", item);
            }
        }
        out.push('\n');
    }

    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}
