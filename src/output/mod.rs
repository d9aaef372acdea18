//! Listing formatting and display
//!
//! This module provides formatters for printing a scanned listing:
//! - Console output with colors (`ListingFormatter`)
//! - JSON output (`print_json`, `write_json`)
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (size and time formatting)
//! - `listing` - Numbered console listing
//! - `json` - JSON output

mod config;
mod json;
mod listing;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use listing::ListingFormatter;
pub use utils::format_size;
