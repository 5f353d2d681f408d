//! JurisLens CLI
//!
//! Reads legal text from a file or stdin, runs the analyzer with the chosen
//! profile and prints the report as tabbed text or JSON. `--export` also
//! writes `jurislens-report.json`.

pub mod error;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lens_engine::export::{self, REPORT_FILE_NAME};
use lens_engine::{input, render, AnalysisReport, Profile};
use tracing::{debug, info, warn};

pub use error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Titled sections per tab, followed by the disclaimer
    #[default]
    Text,
    /// Pretty JSON, identical to the exported file
    Json,
}

/// Command-line arguments for the JurisLens analyzer
#[derive(Parser, Debug)]
#[command(name = "jurislens")]
#[command(version, about = "Heuristic summary, key terms and risk flags for legal text")]
pub struct Args {
    /// Text file to analyze. Reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Analyzer profile: landing or playground
    #[arg(short, long, default_value = "landing")]
    pub profile: Profile,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the JSON report to a file
    #[arg(long)]
    pub export: bool,

    /// Export destination (file or directory). Defaults to ./jurislens-report.json
    #[arg(short, long, requires = "export")]
    pub output: Option<PathBuf>,

    /// Analyze short input and overwrite an existing export
    #[arg(long)]
    pub force: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Drop a leading UTF-8 byte order mark, as browsers do when decoding files
pub fn strip_bom(text: String) -> String {
    if text.starts_with('\u{FEFF}') {
        text['\u{FEFF}'.len_utf8()..].to_string()
    } else {
        text
    }
}

/// Load the input text from `file`, or stdin when absent or "-"
pub fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    let text = match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.display().to_string(),
                source,
            })?
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::ReadInput {
                    path: "stdin".to_string(),
                    source,
                })?;
            text
        }
    };
    Ok(strip_bom(text))
}

/// Apply the minimum-length gate unless `force` is set
pub fn check_gate(text: &str, force: bool) -> Result<(), CliError> {
    if input::is_analyzable(text) {
        return Ok(());
    }
    if force {
        warn!(
            "Input is below the {}-character minimum; analyzing anyway",
            input::MIN_INPUT_CHARS
        );
        return Ok(());
    }
    Err(CliError::InputTooShort {
        remaining: input::chars_remaining(text),
    })
}

/// Where the export lands: `output` as a file, inside `output` when it is a
/// directory, otherwise the report file name in the working directory
pub fn export_path(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(REPORT_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(REPORT_FILE_NAME),
    }
}

pub fn write_export(report: &AnalysisReport, path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }
    let json = export::to_pretty_json(report)?;
    std::fs::write(path, json).map_err(|source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Render the report for stdout
pub fn format_report(
    report: &AnalysisReport,
    profile: Profile,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render::render_text(report, profile.config())),
        OutputFormat::Json => {
            let mut json = export::to_pretty_json(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Full run: read, gate, analyze, optionally export. Returns stdout content.
pub fn run(args: &Args) -> Result<String, CliError> {
    let text = read_input(args.file.as_deref())?;
    debug!("Read {} bytes of input", text.len());

    check_gate(&text, args.force)?;

    let report = lens_engine::analyze(&text, args.profile);
    info!(
        "Analysis with '{}' profile: {} key terms, {} risks",
        args.profile,
        report.key_terms.len(),
        report.risks.len()
    );

    if args.export {
        write_export(&report, &export_path(args.output.as_deref()), args.force)?;
    }

    format_report(&report, args.profile, args.format)
}
