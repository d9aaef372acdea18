//! Grove - an interactive directory browser with a concurrent scanner

pub mod entry;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod session;
pub mod sort;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::Entry;
pub use error::{Error, Result};
pub use output::{ListingFormatter, OutputConfig, format_size, print_json, write_json};
pub use scan::{ScanConfig, Scanner, scan};
pub use session::{MenuChoice, Outcome, Session, SessionConfig, SessionState};
pub use sort::{SortMode, sort_entries};
