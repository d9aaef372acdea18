//! Concurrent directory scanning
//!
//! A scan lists a directory and hands every child to a rayon pool. When
//! recursing, each child that is a directory lists its own children, which
//! form the next wave of units on the same pool. Every unit returns its own
//! entry and the lists are concatenated after each wave, so the result is a
//! flat, unordered `Vec<Entry>` and depth costs no stack.

mod config;
mod scanner;
mod visited;

pub use config::ScanConfig;
pub use scanner::{Scanner, scan};
