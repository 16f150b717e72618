//! Command implementations
//!
//! Commands are split the same way git splits its own:
//!
//! - `plumbing`: Low-level views of the inputs (printing a filtered file)
//! - `porcelain`: The user-facing diff
//!
//! Every command is an `impl Session` block writing through the session's
//! printer.

pub mod plumbing;
pub mod porcelain;
