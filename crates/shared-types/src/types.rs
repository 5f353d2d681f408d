/// Result of one analysis run over a piece of legal text.
///
/// Field names are serialized in camelCase so the exported JSON reads
/// `summary`, `keyTerms`, `risks`, `actions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: String,        // First sentences, joined with single spaces
    pub key_terms: Vec<String>, // Heading labels, in candidate-list order
    pub risks: Vec<String>,     // Risk labels, in trigger-table order
    pub actions: Vec<String>,   // Static recommendations
}
