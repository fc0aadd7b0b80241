//! FILENAME: app/src/input.rs
//! PURPOSE: Reads the input file into whitespace-free records.
//! CONTEXT: Fields are separated by commas only; quotes carry no meaning.
//! Every whitespace character inside a field is removed, so `= A1 + 2`
//! reads as `=A1+2`. Lines that are blank after stripping are skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Splits `content` into records of stripped fields.
pub fn parse_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (line_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("line {}: unreadable record", line_idx + 1))?;
        let fields: Vec<String> = record.iter().map(strip_whitespace).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        records.push(fields);
    }

    log::debug!(target: "INPUT", "read {} records", records.len());
    Ok(records)
}

/// Reads and splits the file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&content)
}

fn strip_whitespace(field: &str) -> String {
    field.chars().filter(|c| !c.is_whitespace()).collect()
}
