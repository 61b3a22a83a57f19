use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::problem::{parse_line, FormatError};
use crate::selection::select;
use crate::types::Selection;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Pack every test case in the file at `path`.
///
/// One output line per non-blank input line, in input order, each terminated
/// by `\n`. A malformed line aborts the whole run; no partial output is
/// returned.
pub fn pack(path: impl AsRef<Path>) -> Result<String, PackError> {
    let input = fs::read_to_string(path)?;
    Ok(pack_lines(input.lines())?)
}

/// Pack an already-read sequence of input lines.
///
/// Blank lines (empty after trimming) are skipped and produce no output line.
pub fn pack_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<String, FormatError> {
    let mut output = String::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        output.push_str(&process_line(line)?);
        output.push('\n');
    }
    Ok(output)
}

/// Solve a single non-blank input line and format its result.
pub fn process_line(line: &str) -> Result<String, FormatError> {
    let package = parse_line(line)?;
    let selection = select(&package.items, package.weight_limit);
    Ok(format_selection(&selection))
}

/// `-` for the empty selection, otherwise ids ascending, comma-joined.
pub fn format_selection(selection: &Selection) -> String {
    if selection.is_empty() {
        return "-".to_string();
    }
    selection
        .ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
