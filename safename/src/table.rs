//! Substitution tables.
//!
//! A table has exactly one slot per byte value, so a lookup is a single
//! array index with no hashing and no miss path: every byte 0..=255 either
//! has a replacement or passes through.

use crate::builtin::SAFE_PROFILE;
use std::fmt;

const N_SLOTS: usize = 256;
const_assert_eq!(N_SLOTS, u8::MAX as usize + 1);

#[derive(Clone, PartialEq, Eq)]
pub struct Table {
    slots: [Option<Box<[u8]>>; N_SLOTS],
}

/// Shorthand for `Table::new()`.
pub fn create_default_table() -> Table {
    Table::new()
}

impl Table {
    /// A table seeded with the built-in safe profile.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|b| SAFE_PROFILE[b].map(|r| Box::from(r.as_bytes()))),
        }
    }

    /// A table with no entries; every byte passes through.
    pub fn empty() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Replace the slot for `byte`. An empty replacement deletes the byte
    /// from cleaned output; a replacement may be any length.
    pub fn put<R>(self: &mut Self, byte: u8, replacement: R)
    where
        R: Into<Vec<u8>>,
    {
        let replacement = replacement.into().into_boxed_slice();
        trace!(
            "Table: put 0x{:02x} => {:?}",
            byte,
            String::from_utf8_lossy(&replacement)
        );
        self.slots[usize::from(byte)] = Some(replacement);
    }

    /// The replacement for `byte`, or `None` if it passes through.
    #[inline]
    pub fn lookup(self: &Self, byte: u8) -> Option<&[u8]> {
        self.slots[usize::from(byte)].as_deref()
    }

    /// Number of bytes that have a replacement.
    pub fn len(self: &Self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(self: &Self) -> bool {
        self.len() == 0
    }

    /// The set slots in ascending byte order.
    pub fn overrides(self: &Self) -> Overrides<'_> {
        Overrides {
            table: self,
            next: 0,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.overrides()
                    .map(|(b, r)| (format!("0x{:02x}", b), String::from_utf8_lossy(r))),
            )
            .finish()
    }
}

pub struct Overrides<'a> {
    table: &'a Table,
    // usize so the walk can step past 0xFF without wrapping.
    next: usize,
}

impl<'a> Iterator for Overrides<'a> {
    type Item = (u8, &'a [u8]);
    fn next(self: &mut Self) -> Option<(u8, &'a [u8])> {
        while self.next < N_SLOTS {
            let b = self.next;
            self.next += 1;
            if let Some(r) = self.table.slots[b].as_deref() {
                return Some((b as u8, r));
            }
        }
        None
    }
}
