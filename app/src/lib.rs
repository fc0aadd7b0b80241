//! FILENAME: app/src/lib.rs
//! PURPOSE: Front end for the tabula engine: reads the input file, evaluates
//! it and renders the result.
//! CONTEXT: Everything returns `anyhow::Result`; deciding the exit status is
//! left to `main`.

pub mod config;
pub mod input;
pub mod logging;
pub mod render;

use std::path::Path;

use anyhow::Result;
use engine::{ResolvedSheet, Sheet};

pub use config::{Config, OutputFormat};

/// Builds and evaluates a sheet from already tokenized records.
pub fn evaluate_records(records: &[Vec<String>]) -> Result<ResolvedSheet> {
    let sheet = Sheet::from_records::<Vec<String>, String>(records)?;
    log::info!(
        target: "CLI",
        "evaluating {} rows x {} columns",
        sheet.schema().row_count(),
        sheet.schema().column_count()
    );
    Ok(sheet.evaluate()?)
}

/// Reads, evaluates and renders the file at `path`.
pub fn evaluate_file(path: &Path, format: OutputFormat) -> Result<String> {
    let records = input::read_records(path)?;
    let resolved = evaluate_records(&records)?;
    match format {
        OutputFormat::Table => Ok(render::render_table(&resolved)),
        OutputFormat::Json => render::render_json(&resolved),
    }
}

/// Runs one evaluation as configured and returns the text for stdout.
pub fn run(config: &Config) -> Result<String> {
    log::info!(target: "CLI", "input {}", config.input.display());
    evaluate_file(&config.input, config.format)
}
