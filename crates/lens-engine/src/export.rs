//! JSON export of analysis reports

use shared_types::AnalysisReport;
use thiserror::Error;

/// File name offered for the downloaded report
pub const REPORT_FILE_NAME: &str = "jurislens-report.json";

pub const REPORT_MIME_TYPE: &str = "application/json";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse report: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Pretty-printed JSON with two-space indentation
pub fn to_pretty_json(report: &AnalysisReport) -> Result<String, ExportError> {
    serde_json::to_string_pretty(report).map_err(ExportError::Serialize)
}

pub fn from_json(json: &str) -> Result<AnalysisReport, ExportError> {
    serde_json::from_str(json).map_err(ExportError::Deserialize)
}
