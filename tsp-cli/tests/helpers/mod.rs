//! Provides helper functionality shared by the tests.

#[macro_use]
pub mod macros;

use std::io::Write;
use tempfile::NamedTempFile;

/// A small symmetric problem used across the tests.
pub const THREE_CITY_PROBLEM: &str =
    "Athens-Berlin: 787\nBerlin-Cairo: 2015\nCairo-Athens: 2451\n";

/// Creates a temporary file with the given problem definition.
pub fn create_problem_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("cannot create a temporary file");
    file.write_all(content.as_bytes()).expect("cannot write a temporary file");
    file.flush().expect("cannot flush a temporary file");

    file
}
