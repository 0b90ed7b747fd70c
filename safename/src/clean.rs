//! The substitution engine.
//!
//! Cleaning is a single left-to-right pass over the input bytes. Each byte
//! is looked up in the table; a set slot contributes its replacement (which
//! may be empty, one byte or many), an empty slot contributes the byte
//! itself. There is no lookahead and no merging of adjacent output, so two
//! unsafe bytes in a row become two markers in a row.

use crate::table::Table;
use std::process;
use thiserror::Error;

/// Misuse of the engine by its caller.
///
/// This is a contract violation, not a runtime condition to recover from:
/// it means the caller was about to run filenames through without any
/// sanitizing rules at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanError {
    #[error("clean called without a translation table")]
    MissingTable,
}

impl CleanError {
    /// Process status used by [`clean_or_exit`].
    pub fn exit_code(self: &Self) -> i32 {
        match self {
            CleanError::MissingTable => 1,
        }
    }
}

/// Substitute every byte of `input` according to `table`.
///
/// The result is a fresh buffer whose length is the sum of the replacement
/// lengths, counting one for each pass-through byte.
pub fn clean(input: &[u8], table: &Table) -> Vec<u8> {
    trace!("clean: {} input bytes", input.len());
    // Most bytes pass through, so the input length is a good first guess.
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        match table.lookup(b) {
            Some(r) => out.extend_from_slice(r),
            None => out.push(b),
        }
    }
    trace!("clean: {} output bytes", out.len());
    out
}

/// The checked form of [`clean`] for callers that hold optional values.
///
/// The table is validated before the input: a missing table is always an
/// error, even when there is nothing to clean. A missing input with a table
/// present is not an error and yields `Ok(None)`.
pub fn try_clean(
    input: Option<&[u8]>,
    table: Option<&Table>,
) -> Result<Option<Vec<u8>>, CleanError> {
    let table = table.ok_or(CleanError::MissingTable)?;
    match input {
        None => {
            debug!("clean: no input, nothing to do");
            Ok(None)
        }
        Some(s) => Ok(Some(clean(s, table))),
    }
}

/// Like [`try_clean`], but a missing table terminates the process with
/// [`CleanError::exit_code`] instead of returning.
pub fn clean_or_exit(input: Option<&[u8]>, table: Option<&Table>) -> Option<Vec<u8>> {
    match try_clean(input, table) {
        Ok(out) => out,
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
