//! Line-oriented file comparison in the style of classic `diff`
//!
//! - `areas`: Session, options and input workspace
//! - `artifacts`: The diff core, line handling and output printing
//! - `commands`: The diff and print commands
//! - `errors`: Error type of the diff core

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
