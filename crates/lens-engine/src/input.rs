//! Input gating and the demo sample

/// Minimum trimmed length, in characters, before analysis is offered
pub const MIN_INPUT_CHARS: usize = 40;

/// Pre-filled text for the landing-page demo
pub const SAMPLE_TEXT: &str = "This Non-Disclosure Agreement (\"Agreement\") is entered into as of the Effective Date. Confidential Information shall mean any information disclosed by either party that is designated as confidential. Term and Termination: This Agreement commences on the Effective Date and continues for one (1) year, unless earlier terminated upon thirty (30) days' written notice. Parties agree that disclosure may be made on a non-exclusive basis. Limitation of Liability: In no event shall either party be liable for indirect or consequential damages; liability is limited to the fees paid in the twelve (12) months preceding the claim. Governing Law: This Agreement shall be governed by the laws of the State of California. Indemnification: Each party shall indemnify and hold the other harmless from third-party claims arising out of breach of this Agreement.";

/// Whether the "Analyze" action should be enabled for `text`.
///
/// This is a usability gate only; the analyzer itself accepts any string.
pub fn is_analyzable(text: &str) -> bool {
    text.trim().chars().count() >= MIN_INPUT_CHARS
}

/// Characters still needed before `text` passes the gate
pub fn chars_remaining(text: &str) -> usize {
    MIN_INPUT_CHARS.saturating_sub(text.trim().chars().count())
}
