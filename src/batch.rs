use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::report::Report;
use crate::rfc5424::validate_message;

/// Outcome of validating a stream of newline-delimited messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Number of lines read.
    pub lines: usize,
    /// Number of lines the caller expected.
    pub expected: usize,
    /// Reports for the lines that failed, with their 1-based line numbers.
    pub failures: Vec<(usize, Report)>,
}

impl FileReport {
    /// True when every line conformed and the line count matched.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && self.lines == self.expected
    }
}

/// Validate every newline-delimited message in `reader`.
///
/// Lines are read as raw bytes, so messages carrying invalid UTF-8 still
/// reach the validator. A failing line never stops the run; its report is
/// collected and reading continues. Only I/O errors propagate.
pub fn validate_lines<R: BufRead>(reader: R, expected: usize) -> io::Result<FileReport> {
    let mut lines = 0;
    let mut failures = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        lines += 1;

        let report = validate_message(&line);
        if !report.is_valid() {
            failures.push((lines, report));
        }
    }

    Ok(FileReport {
        lines,
        expected,
        failures,
    })
}

/// Validate a file of newline-delimited messages.
pub fn validate_file<P: AsRef<Path>>(path: P, expected: usize) -> io::Result<FileReport> {
    let file = File::open(path)?;
    validate_lines(BufReader::new(file), expected)
}
