use crate::patterns::RiskTrigger;

/// Labels of every trigger contained in `text`, in table order.
///
/// Matching is plain case-insensitive containment: "indemn" fires on
/// "indemnify" as well as "Indemnification".
pub fn detect_risks(text: &str, table: &[RiskTrigger]) -> Vec<String> {
    let text_lower = text.to_lowercase();

    table
        .iter()
        .filter(|risk| text_lower.contains(risk.trigger))
        .map(|risk| risk.label.to_string())
        .collect()
}
