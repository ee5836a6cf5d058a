#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rollcall::Report;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file by name.
pub fn read_fixture(name: &str) -> String {
    let path = fixture_root().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {:?} not found", path))
}

/// Two-department report used across tests.
pub fn staff_report() -> Report {
    Report::parse(&read_fixture("staff.txt")).expect("staff fixture parses")
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixture_root().join(name)
}
