//! Sorting for scanned entries.

use clap::ValueEnum;

use crate::entry::Entry;

/// The key a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Keep whatever order the scan produced (not stable between runs).
    #[default]
    None,
    /// Byte-wise lexicographic on the name.
    Name,
    /// File size in bytes; directories count as 0.
    Size,
    /// Last-modified time, oldest first.
    Modified,
    /// Numeric permission bits.
    Permissions,
}

impl SortMode {
    /// Map menu actions 3-6 to their sort mode.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            3 => Some(SortMode::Name),
            4 => Some(SortMode::Size),
            5 => Some(SortMode::Modified),
            6 => Some(SortMode::Permissions),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Name => "name",
            SortMode::Size => "size",
            SortMode::Modified => "modification time",
            SortMode::Permissions => "permissions",
        }
    }
}

/// Sort `entries` in place, ascending on the key selected by `mode`.
///
/// The sort is stable: entries with equal keys keep their scan order.
pub fn sort_entries(entries: &mut [Entry], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Name => entries.sort_by(|a, b| a.name().cmp(b.name())),
        SortMode::Size => entries.sort_by_key(Entry::size),
        SortMode::Modified => entries.sort_by_key(Entry::modified),
        SortMode::Permissions => entries.sort_by_key(Entry::permissions),
    }
}
