//! Translation table files.
//!
//! A table file is a line-oriented list of overrides to apply on top of an
//! existing [`Table`]:
//!
//! ```text
//! # tabs get spelled out, ampersands get dropped
//! start
//! 0x09    _tab_
//! 38
//! end
//! ```
//!
//! Each entry is a byte value followed by an optional replacement. Values
//! may be hexadecimal (`0x26`), octal (`046`) or decimal (`38`). An entry
//! with no replacement deletes that byte from cleaned output; anything after
//! the replacement is an error. Values are unsigned, so `+38` is rejected.
//! `#` starts a comment. The `start` and `end` lines are optional; anything
//! after `end` is ignored.

use crate::table::Table;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableFileError {
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: cannot parse byte value {token:?}")]
    BadValue { line: usize, token: String },

    #[error("line {line}: value {value:#x} is not a byte")]
    ValueOutOfRange { line: usize, value: u32 },

    #[error("line {line}: unexpected {token:?} after the replacement")]
    TrailingTokens { line: usize, token: String },
}

const COMMENT: char = '#';
const KEYWORD_START: &str = "start";
const KEYWORD_END: &str = "end";

/// Apply every entry in `reader` to `table`, returning how many were applied.
///
/// Entries before a bad line stay applied.
pub fn apply<R>(table: &mut Table, reader: R) -> Result<usize, TableFileError>
where
    R: BufRead,
{
    let mut applied = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let content = match line.find(COMMENT) {
            Some(pos) => &line[..pos],
            None => &line[..],
        };
        let mut fields = content.split_whitespace();
        let token = match fields.next() {
            None => continue,
            Some(t) => t,
        };
        if token == KEYWORD_START {
            continue;
        }
        if token == KEYWORD_END {
            debug!("table file: end at line {}", lineno);
            break;
        }
        let byte = parse_byte(token, lineno)?;
        let replacement = fields.next().unwrap_or("");
        if let Some(extra) = fields.next() {
            return Err(TableFileError::TrailingTokens {
                line: lineno,
                token: extra.to_string(),
            });
        }
        debug!(
            "table file: line {}: 0x{:02x} => {:?}",
            lineno, byte, replacement
        );
        table.put(byte, replacement);
        applied += 1;
    }
    Ok(applied)
}

fn parse_byte(token: &str, line: usize) -> Result<u8, TableFileError> {
    let bad_value = || TableFileError::BadValue {
        line: line,
        token: token.to_string(),
    };
    let (digits, radix) = if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        (hex, 16)
    } else if token.len() > 1 && token.starts_with('0') {
        (&token[1..], 8)
    } else {
        (token, 10)
    };
    // from_str_radix accepts a leading '+'.
    if digits.starts_with(['+', '-']) {
        return Err(bad_value());
    }
    let value = u32::from_str_radix(digits, radix).map_err(|_| bad_value())?;
    u8::try_from(value).map_err(|_| TableFileError::ValueOutOfRange {
        line: line,
        value: value,
    })
}

impl Table {
    /// A default table with the entries from `reader` applied on top.
    pub fn from_table_file<R>(reader: R) -> Result<Self, TableFileError>
    where
        R: BufRead,
    {
        let mut table = Table::new();
        let n = apply(&mut table, reader)?;
        debug!("table file: applied {} entries", n);
        Ok(table)
    }
}
