//! FILENAME: app/src/config.rs
//! PURPOSE: Command-line configuration for the `tabula` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the resolved grid is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated table with the header line first
    #[default]
    Table,
    /// `{"columns": [...], "rows": [{"label", "values"}]}`
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tabula")]
#[command(about = "Evaluate a comma-separated grid of numbers and single-operator formulas")]
#[command(version)]
pub struct Config {
    /// Input file: header line, then one line per row
    pub input: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Also write log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Configuration for evaluating `input` with default settings.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            format: OutputFormat::Table,
            verbosity: 0,
            log_file: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
