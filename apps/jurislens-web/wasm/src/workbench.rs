use std::fmt::Display;

use lens_engine::export::{self, ExportError};
use lens_engine::input::{self, SAMPLE_TEXT};
use lens_engine::render::{self, ReportTab};
use lens_engine::{AnalysisReport, Profile};
use wasm_bindgen::prelude::*;

/// Analyzer page state: input text, uploaded file name, latest report and
/// the tab being viewed. JavaScript only forwards DOM events.
#[wasm_bindgen]
pub struct Workbench {
    profile: Profile,
    text: String,
    file_name: Option<String>,
    report: Option<AnalysisReport>,
    selected_tab: ReportTab,
    status: Option<String>,
}

impl Workbench {
    /// Landing starts from the sample agreement, the playground from nothing
    pub fn new(profile: Profile) -> Self {
        let text = match profile {
            Profile::Landing => SAMPLE_TEXT.to_string(),
            Profile::Playground => String::new(),
        };
        Self {
            profile,
            text,
            file_name: None,
            report: None,
            selected_tab: ReportTab::default(),
            status: None,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn can_analyze(&self) -> bool {
        input::is_analyzable(&self.text)
    }

    /// Replace the current report. Returns false, leaving state alone, when
    /// the input is below the minimum length.
    pub fn analyze(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        self.report = Some(lens_engine::analyze(&self.text, self.profile));
        self.selected_tab = ReportTab::default();
        self.status = None;
        true
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn clear(&mut self) {
        self.report = None;
        self.selected_tab = ReportTab::default();
    }

    pub fn select_tab(&mut self, tab: ReportTab) {
        self.selected_tab = tab;
    }

    pub fn selected_tab(&self) -> ReportTab {
        self.selected_tab
    }

    /// Lines under `tab`, or the placeholder when nothing has been analyzed
    pub fn tab_items(&self, tab: ReportTab) -> Vec<String> {
        let empty = &self.profile.config().empty_text;
        match &self.report {
            Some(report) => render::tab_items(report, tab, empty),
            None => vec![empty.no_report.to_string()],
        }
    }

    /// Apply the outcome of reading an uploaded file. A failed read keeps the
    /// current text and file name and leaves a message for the page to show.
    pub fn load_file<E: Display>(&mut self, name: &str, result: Result<String, E>) {
        match result {
            Ok(contents) => {
                self.text = contents;
                self.file_name = Some(name.to_string());
                self.status = None;
            }
            Err(e) => {
                self.status = Some(format!("Could not read {}: {}", name, e));
            }
        }
    }

    /// Compact JSON of the current report, if one exists
    pub fn report_json(&self) -> Result<Option<String>, serde_json::Error> {
        self.report.as_ref().map(serde_json::to_string).transpose()
    }

    /// Pretty JSON for download, if a report exists
    pub fn export_json(&self) -> Result<Option<String>, ExportError> {
        self.report.as_ref().map(export::to_pretty_json).transpose()
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

// WASM bindings
#[wasm_bindgen]
impl Workbench {
    #[wasm_bindgen(constructor)]
    pub fn new_wasm(profile: &str) -> Result<Workbench, JsValue> {
        let profile: Profile = profile
            .parse()
            .map_err(|e: lens_engine::ProfileError| JsValue::from_str(&e.to_string()))?;
        Ok(Self::new(profile))
    }

    #[wasm_bindgen(js_name = getProfile)]
    pub fn get_profile(&self) -> String {
        self.profile.id().to_string()
    }

    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text_wasm(&mut self, text: &str) {
        self.set_text(text);
    }

    #[wasm_bindgen(js_name = getFileName)]
    pub fn get_file_name(&self) -> Option<String> {
        self.file_name.clone()
    }

    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> Option<String> {
        self.status.clone()
    }

    #[wasm_bindgen(js_name = canAnalyze)]
    pub fn can_analyze_wasm(&self) -> bool {
        self.can_analyze()
    }

    #[wasm_bindgen(js_name = charsRemaining)]
    pub fn chars_remaining(&self) -> u32 {
        input::chars_remaining(&self.text) as u32
    }

    #[wasm_bindgen(js_name = runAnalysis)]
    pub fn run_analysis(&mut self) -> bool {
        self.analyze()
    }

    #[wasm_bindgen(js_name = hasReport)]
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    #[wasm_bindgen(js_name = getReportJson)]
    pub fn get_report_json(&self) -> Result<Option<String>, JsValue> {
        self.report_json()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = getReport)]
    pub fn get_report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.report)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = selectTab)]
    pub fn select_tab_wasm(&mut self, tab_id: &str) -> Result<(), JsValue> {
        let tab = ReportTab::parse_id(tab_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown tab: {}", tab_id)))?;
        self.select_tab(tab);
        Ok(())
    }

    #[wasm_bindgen(js_name = getSelectedTab)]
    pub fn get_selected_tab(&self) -> String {
        self.selected_tab.id().to_string()
    }

    /// Items for the selected tab as a JS string array
    #[wasm_bindgen(js_name = getTabItems)]
    pub fn get_tab_items(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.tab_items(self.selected_tab))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = clearReport)]
    pub fn clear_report(&mut self) {
        self.clear();
    }

    #[wasm_bindgen(js_name = getDisclaimer)]
    pub fn get_disclaimer(&self) -> String {
        render::DISCLAIMER.to_string()
    }

    /// Trigger a browser download of the current report
    #[wasm_bindgen(js_name = downloadReport)]
    pub fn download_report(&self) -> Result<(), JsValue> {
        let json = self
            .export_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .ok_or_else(|| JsValue::from_str("No report to download"))?;
        crate::browser::download_json(export::REPORT_FILE_NAME, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_landing_starts_with_sample() {
        let bench = Workbench::new(Profile::Landing);
        assert_eq!(bench.text(), SAMPLE_TEXT);
        assert!(bench.can_analyze());
        assert!(bench.report().is_none());
    }

    #[test]
    fn test_playground_starts_empty_and_gated() {
        let mut bench = Workbench::new(Profile::Playground);
        assert_eq!(bench.text(), "");
        assert!(!bench.analyze());
        assert!(bench.report().is_none());
        assert_eq!(bench.tab_items(ReportTab::Summary), vec!["Run an analysis to see results."]);
    }

    #[test]
    fn test_analyze_replaces_previous_report() {
        let mut bench = Workbench::new(Profile::Playground);
        bench.set_text("The license granted here is perpetual and cannot be withdrawn.");
        assert!(bench.analyze());
        assert_eq!(bench.report().unwrap().risks, vec!["Perpetual obligations"]);

        bench.set_text("Either party may terminate without notice at any time it likes.");
        bench.select_tab(ReportTab::Risks);
        assert!(bench.analyze());
        assert_eq!(bench.report().unwrap().risks, vec!["Changes without notice"]);
        assert_eq!(bench.selected_tab(), ReportTab::Summary);
    }

    #[test]
    fn test_gated_analyze_keeps_previous_report() {
        let mut bench = Workbench::new(Profile::Landing);
        assert!(bench.analyze());
        let before = bench.report().cloned();
        bench.set_text("short");
        assert!(!bench.analyze());
        assert_eq!(bench.report().cloned(), before);
    }

    #[test]
    fn test_load_file_success_replaces_text() {
        let mut bench = Workbench::new(Profile::Landing);
        bench.load_file::<String>("nda.txt", Ok("Uploaded agreement text.".to_string()));
        assert_eq!(bench.text(), "Uploaded agreement text.");
        assert_eq!(bench.file_name(), Some("nda.txt"));
        assert_eq!(bench.status(), None);
    }

    #[test]
    fn test_load_file_failure_leaves_input_unchanged() {
        let mut bench = Workbench::new(Profile::Landing);
        bench.load_file::<String>("first.txt", Ok("Original text stays put.".to_string()));
        bench.load_file("broken.txt", Err("permission denied"));

        assert_eq!(bench.text(), "Original text stays put.");
        assert_eq!(bench.file_name(), Some("first.txt"));
        assert_eq!(
            bench.status(),
            Some("Could not read broken.txt: permission denied")
        );
    }

    #[test]
    fn test_tab_items_follow_report() {
        let mut bench = Workbench::new(Profile::Landing);
        bench.analyze();
        assert_eq!(
            bench.tab_items(ReportTab::Risks),
            bench.report().unwrap().risks
        );
        assert_eq!(
            bench.tab_items(ReportTab::KeyTerms),
            vec!["No explicit headings detected."]
        );
    }

    #[test]
    fn test_export_json_requires_report() {
        let mut bench = Workbench::new(Profile::Landing);
        assert_eq!(bench.export_json().unwrap(), None);
        bench.analyze();
        let json = bench.export_json().unwrap().unwrap();
        assert_eq!(export::from_json(&json).unwrap(), *bench.report().unwrap());
    }

    #[test]
    fn test_report_json_is_compact_camel_case() {
        let mut bench = Workbench::new(Profile::Landing);
        assert_eq!(bench.report_json().unwrap(), None);
        bench.analyze();
        let json = bench.report_json().unwrap().unwrap();
        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["risks"][0], "Limitation of liability");
        assert_eq!(value["keyTerms"], serde_json::json!([]));
    }

    #[test]
    fn test_clear_discards_report() {
        let mut bench = Workbench::new(Profile::Landing);
        bench.analyze();
        bench.clear();
        assert!(bench.report().is_none());
    }

    #[test]
    fn test_wasm_constructor_accepts_profile_name() {
        assert!(Workbench::new_wasm("playground").is_ok());
    }
}
