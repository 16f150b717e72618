//! Diff algorithms and output formatting
//!
//! The diff is computed in three stages:
//!
//! - `myers`: Myers' O(ND) search over the edit graph and the backtrack that
//!   turns its trace into an edit script
//! - `hunk`: Grouping of the edit script into normal or unified hunks
//! - `format`: Rendering of those hunks through a printer
//!
//! `edit` holds the types shared by all three: the edit operations, the
//! script and the line equality predicate.

pub mod edit;
pub mod format;
pub mod hunk;
pub mod myers;
