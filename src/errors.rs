//! Error types for the diff core
//!
//! Everything that can go wrong inside the search, the reconstruction or the
//! formatter is a [`DiffError`]. None of these are transient: they either
//! signal a broken invariant or a resource limit, and the diff is aborted.
//! The command layer wraps them into `anyhow::Error` together with I/O errors.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    /// The search ran past the `d <= m + n` bound without reaching the end
    /// of the edit graph. Only a misbehaving equality predicate gets here.
    #[error("edit graph search exhausted its bound of {bound} edits without a solution")]
    SearchExhausted { bound: usize },

    #[error("not enough memory to store the search trace: {0}")]
    Allocation(#[from] TryReserveError),

    /// An operation refers to a line outside of either sequence, or the
    /// trace could not be walked back to the origin.
    #[error("malformed edit script: {reason}")]
    MalformedScript { reason: String },

    #[error("inputs have {lines} lines in total, which exceeds the limit of {limit}")]
    InputTooLarge { lines: usize, limit: usize },

    #[error("failed to write diff output: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DiffError::MalformedScript {
            reason: reason.into(),
        }
    }
}

pub type DiffResult<T> = Result<T, DiffError>;
