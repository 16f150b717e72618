//! Plumbing commands
//!
//! - `print`: Print a single file as the diff core sees it

pub mod print;
