//! Error types for the JurisLens CLI

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is too short to analyze ({remaining} more characters needed). Use --force to analyze anyway")]
    InputTooShort { remaining: usize },

    #[error("Refusing to overwrite {0}. Use --force to replace it")]
    OutputExists(PathBuf),

    #[error(transparent)]
    Export(#[from] lens_engine::export::ExportError),

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
