//! Hex-column vector files shared with the hardware verification bench.
//!
//! One lowercase hex value per line, `\n` separators, and no newline after
//! the final value. The formatting is a bit-for-bit contract.

use snafu::{OptionExt, ResultExt, Snafu};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum HexError {
    #[snafu(display("failed to read {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to write {}: {source}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("{} line {line}: bad hex value {value:?}", path.display()))]
    BadValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

/// Writes one hex value per line.
pub fn write_column(path: &Path, values: &[u32]) -> Result<(), HexError> {
    let mut text = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        let _ = write!(text, "{value:x}");
    }
    fs::write(path, text).context(WriteSnafu { path })
}

/// Reads a hex column back.
pub fn read_column(path: &Path) -> Result<Vec<u32>, HexError> {
    let text = fs::read_to_string(path).context(ReadSnafu { path })?;
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(line, value)| {
            u32::from_str_radix(value, 16).ok().context(BadValueSnafu {
                path,
                line: line + 1,
                value,
            })
        })
        .collect()
}
