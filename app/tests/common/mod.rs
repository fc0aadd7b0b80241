//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for tabula integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Writes input files into a private temp directory.
pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes `content` to `name` inside the harness directory.
    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Runs the `tabula` binary with `args`.
    pub fn run_cli(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tabula"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap()
    }
}

/// Sample grids used across tests.
pub struct GridFixture;

impl GridFixture {
    /// Two columns, two rows, formulas referencing forward and back.
    pub fn basic() -> &'static str {
        ",A,B\n1,10,=A1+5\n2,=A1*2,20\n"
    }

    /// Sparse row labels, a forward reference and a multi-letter column.
    pub fn forward() -> &'static str {
        ",A,B,Cell\n1,1,=A1+1,3\n2,=A1+B30,=B1*2,5\n30,0,=B2+Cell2,7\n"
    }

    pub fn cyclic() -> &'static str {
        ",A\n1,=A2-1\n2,=A1+1\n"
    }

    pub fn division_by_near_zero() -> &'static str {
        ",A,B\n1,4,=A1/0.0000000000000001\n"
    }
}
