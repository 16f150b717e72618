//! Data structures and algorithms
//!
//! - `core`: Shared output utilities (printer, colors)
//! - `diff`: Myers' diff, hunk grouping and rendering
//! - `lines`: Line splitting and filtering of the inputs

pub mod core;
pub mod diff;
pub mod lines;
