//! Byte-table substitution for sanitizing filenames.
//!
//! A [`Table`] maps each of the 256 byte values to either nothing (the byte
//! passes through) or a replacement byte string. [`clean`] walks an input one
//! byte at a time and builds a new string from those replacements. The
//! built-in "safe" profile turns shell and filesystem metacharacters into `_`,
//! brackets into `-`, and `&` into `_and_`:
//!
//! ```
//! let mut table = safename::create_default_table();
//! assert_eq!(safename::clean(b"{brace left", &table), b"-brace_left");
//!
//! table.put(b'\t', "_tab_");
//! assert_eq!(safename::clean(b"hi\tthere", &table), b"hi_tab_there");
//! ```
//!
//! The engine is byte-oriented. It never decodes UTF-8 or any other multi-byte
//! encoding; since the safe profile has no entries at or above 0x80, such
//! sequences survive intact.

#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

mod builtin;
mod clean;
mod iter;
mod table;
pub mod table_file;

pub use crate::builtin::{AMPERSAND_MARKER, BRACKET_MARKER, GENERIC_MARKER, SAFE_PROFILE};
pub use crate::clean::{clean, clean_or_exit, try_clean, CleanError};
pub use crate::iter::{
    write_cleaned, CleanBytes, CleanChunk, CleanChunkIter, CleanIter, DrainCleanChunkIter,
};
pub use crate::table::{create_default_table, Overrides, Table};
pub use crate::table_file::TableFileError;
