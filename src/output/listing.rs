//! Numbered console listing
//!
//! Prints one line per entry:
//!
//! ```text
//! 1. src (Directory)
//! 2. Cargo.toml (Size: 812 bytes, Permissions: -rw-r--r--, Modification: 2024-05-01 13:45:10 +0200)
//! ```

use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::entry::Entry;

use super::config::OutputConfig;
use super::utils::{format_size, format_timestamp};

/// Formatter for the numbered entry listing.
pub struct ListingFormatter {
    config: OutputConfig,
}

impl ListingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the `Files:` header followed by every entry in order.
    pub fn write_listing<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        entries: &[Entry],
    ) -> io::Result<()> {
        writeln!(out, "Files:")?;
        for (i, entry) in entries.iter().enumerate() {
            self.write_entry(out, i + 1, entry)?;
        }
        Ok(())
    }

    fn write_entry<W: WriteColor + ?Sized>(
        &self,
        out: &mut W,
        number: usize,
        entry: &Entry,
    ) -> io::Result<()> {
        write!(out, "{}. ", number)?;

        if entry.is_dir() {
            if self.config.use_color {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", entry.name())?;
            out.reset()?;
            writeln!(out, " (Directory)")?;
            return Ok(());
        }

        writeln!(
            out,
            "{} (Size: {}, Permissions: {}, Modification: {})",
            entry.name(),
            self.size_text(entry.size()),
            entry.permissions_string(),
            format_timestamp(&entry.modified_local()),
        )
    }

    fn size_text(&self, size: u64) -> String {
        if self.config.human_sizes {
            format_size(size)
        } else {
            format!("{} bytes", size)
        }
    }
}
