use crate::errors::{DiffError, DiffResult};
use std::fmt::Display;

/// A single step of an edit script.
///
/// Indices are 0-based. The anchor of an `Insert` (`a_pos`) and of a
/// `Delete` (`b_pos`) is the number of lines of the other sequence that
/// precede the operation, so it may be `0` (before the first line) or equal
/// to the length of that sequence (after the last line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Keep { a: usize, b: usize },
    Insert { a_pos: usize, b: usize },
    Delete { a: usize, b_pos: usize },
}

impl Edit {
    pub fn is_keep(&self) -> bool {
        matches!(self, Edit::Keep { .. })
    }

    pub fn is_change(&self) -> bool {
        !self.is_keep()
    }

    /// Number of lines of A that come before this operation.
    pub fn a_position(&self) -> usize {
        match *self {
            Edit::Keep { a, .. } | Edit::Delete { a, .. } => a,
            Edit::Insert { a_pos, .. } => a_pos,
        }
    }

    /// Number of lines of B that come before this operation.
    pub fn b_position(&self) -> usize {
        match *self {
            Edit::Keep { b, .. } | Edit::Insert { b, .. } => b,
            Edit::Delete { b_pos, .. } => b_pos,
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Keep { a, b } => write!(f, "={a}:{b}"),
            Edit::Insert { a_pos, b } => write!(f, "+{a_pos}:{b}"),
            Edit::Delete { a, b_pos } => write!(f, "-{a}:{b_pos}"),
        }
    }
}

/// Decides whether line `i` of A and line `j` of B are the same.
///
/// Closures implement it, so callers can close over whatever comparison
/// state they need without materializing new sequences.
pub trait LineEq {
    fn equals(&self, i: usize, j: usize) -> bool;
}

impl<F> LineEq for F
where
    F: Fn(usize, usize) -> bool,
{
    fn equals(&self, i: usize, j: usize) -> bool {
        self(i, j)
    }
}

/// Byte-wise equality between two line sequences.
pub fn slice_eq<'d, T: AsRef<[u8]>>(a: &'d [T], b: &'d [T]) -> impl LineEq + 'd {
    move |i: usize, j: usize| a[i].as_ref() == b[j].as_ref()
}

/// An ordered edit script transforming A into B.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    edits: Vec<Edit>,
}

impl EditScript {
    pub fn new(edits: Vec<Edit>) -> Self {
        EditScript { edits }
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of non-Keep operations, the edit distance of the script.
    pub fn distance(&self) -> usize {
        self.edits.iter().filter(|edit| edit.is_change()).count()
    }

    /// True when the script contains no insertions or deletions.
    pub fn is_identity(&self) -> bool {
        self.edits.iter().all(Edit::is_keep)
    }

    /// Replays the script on `a`, taking inserted lines from `b`.
    ///
    /// Kept lines are taken from `a`, so with a byte-wise predicate the
    /// result equals `b`.
    pub fn apply<T: Clone>(&self, a: &[T], b: &[T]) -> DiffResult<Vec<T>> {
        let mut out = Vec::with_capacity(b.len());
        let mut next_a = 0;

        for edit in &self.edits {
            match *edit {
                Edit::Keep { a: i, .. } => {
                    let line = a
                        .get(i)
                        .ok_or_else(|| DiffError::malformed(format!("kept line {i} is not in A")))?;
                    if i != next_a {
                        return Err(DiffError::malformed(format!(
                            "kept line {i} is out of order, expected {next_a}"
                        )));
                    }
                    out.push(line.clone());
                    next_a += 1;
                }
                Edit::Delete { a: i, .. } => {
                    if i != next_a || i >= a.len() {
                        return Err(DiffError::malformed(format!(
                            "deleted line {i} is out of order, expected {next_a}"
                        )));
                    }
                    next_a += 1;
                }
                Edit::Insert { b: j, .. } => {
                    let line = b
                        .get(j)
                        .ok_or_else(|| DiffError::malformed(format!("inserted line {j} is not in B")))?;
                    out.push(line.clone());
                }
            }
        }

        if next_a != a.len() {
            return Err(DiffError::malformed(format!(
                "script consumed {next_a} of {} lines of A",
                a.len()
            )));
        }

        Ok(out)
    }
}
