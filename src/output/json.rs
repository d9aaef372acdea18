//! JSON output formatting

use std::io::{self, Write};

use crate::entry::Entry;

/// Write entries as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print entries as pretty-printed JSON to stdout.
pub fn print_json(entries: &[Entry]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, entries)
}
