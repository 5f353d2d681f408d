//! WASM bindings for the JurisLens analyzer
//!
//! State lives in Rust via [`Workbench`]; JavaScript wires DOM events to it.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { Workbench, loadFile } from './pkg/jurislens_wasm.js';
//!
//! await init();
//!
//! let bench = new Workbench("landing");
//! bench = await loadFile(bench, input.files[0]);
//! if (bench.getStatus()) showNotice(bench.getStatus());
//! if (bench.canAnalyze()) bench.runAnalysis();
//! bench.selectTab("risks");
//! render(bench.getTabItems());
//! bench.downloadReport(); // jurislens-report.json
//! ```

pub mod browser;
pub mod workbench;

use lens_engine::{input, Profile};
use wasm_bindgen::prelude::*;

pub use workbench::Workbench;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"JurisLens WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// One-shot analysis. Returns the report as a JSON string.
#[wasm_bindgen]
pub fn analyze_text_wasm(text: &str, profile: &str) -> Result<String, JsValue> {
    let profile: Profile = profile
        .parse()
        .map_err(|e: lens_engine::ProfileError| JsValue::from_str(&e.to_string()))?;
    let report = lens_engine::analyze(text, profile);

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Whether the Analyze button should be enabled for `text`
#[wasm_bindgen]
pub fn is_analyzable(text: &str) -> bool {
    input::is_analyzable(text)
}

/// Get list of analyzer profiles
#[wasm_bindgen]
pub fn get_profiles() -> Result<String, JsValue> {
    let profiles: Vec<_> = Profile::ALL
        .iter()
        .map(|p| {
            let config = p.config();
            serde_json::json!({
                "id": p.id(),
                "description": p.description(),
                "detection": config.detection,
                "riskTriggers": config.risk_table.len(),
                "headings": config.heading_candidates,
            })
        })
        .collect();

    serde_json::to_string(&profiles)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize profiles: {}", e)))
}

/// Read an uploaded file into the workbench.
///
/// Takes the workbench by value so the returned future owns its state;
/// callers reassign the result. Read failures are recorded on the workbench
/// as a status message rather than rejected.
#[wasm_bindgen(js_name = loadFile)]
pub async fn load_file(mut workbench: Workbench, file: web_sys::File) -> Workbench {
    let name = file.name();
    let result = browser::read_file_text(&file)
        .await
        .map_err(|e| browser::describe_js_error(&e));

    if let Err(ref message) = result {
        web_sys::console::warn_1(&format!("Failed to read {}: {}", name, message).into());
    }
    workbench.load_file(&name, result);
    workbench
}
