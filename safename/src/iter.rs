/*
* Iterators for cleaning bytes lazily, and for streaming cleaned output.
*
* Nothing here changes what cleaning means; these are sequence adaptors
* around the same per-byte table lookup that clean() does, for callers that
* would rather not allocate the whole output up front.
*/

use crate::table::Table;
use std::io;

// As with clean(), there are two levels: one iterator that produces a chunk
// per input byte (the byte itself, or its replacement), and another that
// drains chunks sequentially into a flat byte stream.

pub enum CleanChunk<'t> {
    Pass(u8),
    Replace(&'t [u8]),
}

impl<'t> CleanChunk<'t> {
    pub fn as_slice(self: &Self) -> &[u8] {
        match self {
            CleanChunk::Pass(b) => std::slice::from_ref(b),
            CleanChunk::Replace(r) => r,
        }
    }
}

pub struct CleanChunkIter<'t, IT>
where
    IT: Iterator<Item = u8>,
{
    input: IT,
    table: &'t Table,
}

impl<'t, IT> CleanChunkIter<'t, IT>
where
    IT: Iterator<Item = u8>,
{
    pub fn new(input: IT, table: &'t Table) -> Self {
        Self {
            input: input,
            table: table,
        }
    }
}

impl<'t, IT> Iterator for CleanChunkIter<'t, IT>
where
    IT: Iterator<Item = u8>,
{
    type Item = CleanChunk<'t>;
    fn next(self: &mut Self) -> Option<CleanChunk<'t>> {
        let b = self.input.next()?;
        match self.table.lookup(b) {
            None => Some(CleanChunk::Pass(b)),
            Some(r) => {
                trace!("CleanChunkIter: 0x{:02x} => {} bytes", b, r.len());
                Some(CleanChunk::Replace(r))
            }
        }
    }
}

pub struct DrainCleanChunkIter<'t, IT>
where
    IT: Iterator<Item = CleanChunk<'t>>,
{
    inner: IT,
    drain: Option<CleanChunk<'t>>,
    index: usize,
}

impl<'t, IT> DrainCleanChunkIter<'t, IT>
where
    IT: Iterator<Item = CleanChunk<'t>>,
{
    pub fn new(inner: IT) -> Self {
        Self {
            inner: inner,
            drain: None,
            index: 0,
        }
    }
}

impl<'t, IT> Iterator for DrainCleanChunkIter<'t, IT>
where
    IT: Iterator<Item = CleanChunk<'t>>,
{
    type Item = u8;
    fn next(self: &mut Self) -> Option<u8> {
        loop {
            if let Some(chunk) = &self.drain {
                let bytes = chunk.as_slice();
                if self.index < bytes.len() {
                    let ret = bytes[self.index];
                    self.index += 1;
                    return Some(ret);
                }
            }
            // Current chunk exhausted (or empty, for a deleting replacement).
            self.drain = Some(self.inner.next()?);
            self.index = 0;
        }
    }
}

pub type CleanIter<'t, IT> = DrainCleanChunkIter<'t, CleanChunkIter<'t, IT>>;

pub trait CleanBytes {
    type IT: Iterator<Item = u8>;
    fn clean_bytes<'t>(self: &Self, table: &'t Table) -> CleanIter<'t, Self::IT>;
}

impl<'a> CleanBytes for &'a [u8] {
    type IT = ::std::iter::Cloned<::std::slice::Iter<'a, u8>>;
    fn clean_bytes<'t>(self: &Self, table: &'t Table) -> CleanIter<'t, Self::IT> {
        DrainCleanChunkIter::new(CleanChunkIter::new(self.iter().cloned(), table))
    }
}

impl<'a> CleanBytes for &'a str {
    type IT = ::std::str::Bytes<'a>;
    fn clean_bytes<'t>(self: &Self, table: &'t Table) -> CleanIter<'t, Self::IT> {
        DrainCleanChunkIter::new(CleanChunkIter::new(self.bytes(), table))
    }
}

/// Clean `s` straight into `out`, returning the number of bytes written.
///
/// Runs of pass-through bytes are written as one slice rather than byte by
/// byte.
pub fn write_cleaned<W>(s: &[u8], table: &Table, out: &mut W) -> io::Result<usize>
where
    W: io::Write,
{
    let mut total = 0;
    let mut run_start = 0;
    for (i, &b) in s.iter().enumerate() {
        if let Some(r) = table.lookup(b) {
            out.write_all(&s[run_start..i])?;
            out.write_all(r)?;
            total += (i - run_start) + r.len();
            run_start = i + 1;
        }
    }
    out.write_all(&s[run_start..])?;
    total += s.len() - run_start;
    Ok(total)
}
