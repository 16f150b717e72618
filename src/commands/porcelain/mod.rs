//! Porcelain commands
//!
//! - `diff`: Compare two files and print their differences

pub mod diff;
