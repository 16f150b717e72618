//! Grouping of an edit script into hunks
//!
//! Normal diffs group every run of consecutive changes into its own hunk.
//! Unified diffs surround changes with context lines and merge neighbouring
//! changes whose context would touch or overlap.

use crate::artifacts::diff::edit::Edit;

pub const DEFAULT_CONTEXT: usize = 3;

/// Command letter of a normal-diff hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Change,
}

impl Command {
    pub fn letter(self) -> char {
        match self {
            Command::Add => 'a',
            Command::Delete => 'd',
            Command::Change => 'c',
        }
    }
}

/// Inclusive, 1-based line range. An empty side is represented by its
/// anchor, the line after which the other side's lines would go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    fn single(line: usize) -> Self {
        LineRange {
            start: line,
            end: line,
        }
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.end)
        }
    }
}

/// A run of consecutive changes, as printed by `diff` without options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalHunk<'e> {
    edits: &'e [Edit],
}

impl<'e> NormalHunk<'e> {
    pub fn edits(&self) -> &'e [Edit] {
        self.edits
    }

    /// Indices into A of the deleted lines, in order.
    pub fn deleted(&self) -> impl Iterator<Item = usize> + 'e {
        self.edits.iter().filter_map(|edit| match *edit {
            Edit::Delete { a, .. } => Some(a),
            _ => None,
        })
    }

    /// Indices into B of the inserted lines, in order.
    pub fn inserted(&self) -> impl Iterator<Item = usize> + 'e {
        self.edits.iter().filter_map(|edit| match *edit {
            Edit::Insert { b, .. } => Some(b),
            _ => None,
        })
    }

    pub fn command(&self) -> Command {
        let has_deletions = self.deleted().next().is_some();
        let has_insertions = self.inserted().next().is_some();

        match (has_deletions, has_insertions) {
            (true, true) => Command::Change,
            (true, false) => Command::Delete,
            _ => Command::Add,
        }
    }

    pub fn a_range(&self) -> LineRange {
        match (self.deleted().min(), self.deleted().max()) {
            (Some(first), Some(last)) => LineRange {
                start: first + 1,
                end: last + 1,
            },
            _ => LineRange::single(self.edits[0].a_position()),
        }
    }

    pub fn b_range(&self) -> LineRange {
        match (self.inserted().min(), self.inserted().max()) {
            (Some(first), Some(last)) => LineRange {
                start: first + 1,
                end: last + 1,
            },
            _ => LineRange::single(self.edits[0].b_position()),
        }
    }
}

/// Splits a script into runs of consecutive non-Keep operations.
pub fn normal_hunks(edits: &[Edit]) -> Vec<NormalHunk<'_>> {
    let mut hunks = Vec::new();
    let mut open: Option<usize> = None;

    for (offset, edit) in edits.iter().enumerate() {
        match (edit.is_keep(), open) {
            (true, Some(start)) => {
                hunks.push(NormalHunk {
                    edits: &edits[start..offset],
                });
                open = None;
            }
            (false, None) => open = Some(offset),
            _ => {}
        }
    }

    if let Some(start) = open {
        hunks.push(NormalHunk {
            edits: &edits[start..],
        });
    }

    hunks
}

/// A window of the script with surrounding context, as printed by `diff -u`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedHunk<'e> {
    edits: &'e [Edit],
}

impl<'e> UnifiedHunk<'e> {
    pub fn edits(&self) -> &'e [Edit] {
        self.edits
    }

    /// Lines of A covered by the hunk: kept and deleted ones.
    pub fn a_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Insert { .. }))
            .count()
    }

    /// Lines of B covered by the hunk: kept and inserted ones.
    pub fn b_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Delete { .. }))
            .count()
    }

    /// 1-based first line of A, or the line before the hunk when it covers
    /// no line of A.
    pub fn a_start(&self) -> usize {
        let position = self.edits[0].a_position();
        if self.a_size() == 0 {
            position
        } else {
            position + 1
        }
    }

    pub fn b_start(&self) -> usize {
        let position = self.edits[0].b_position();
        if self.b_size() == 0 {
            position
        } else {
            position + 1
        }
    }
}

/// Groups a script into unified hunks with `context` lines around changes.
///
/// Two changes separated by at most `2 * context` kept lines share a hunk.
pub fn unified_hunks(edits: &[Edit], context: usize) -> Vec<UnifiedHunk<'_>> {
    let next_change = |from: usize| (from..edits.len()).find(|&i| edits[i].is_change());

    let max_gap = context.saturating_mul(2);
    let mut hunks = Vec::new();
    let mut offset = 0;

    while let Some(first) = next_change(offset) {
        let start = first.saturating_sub(context);
        let mut last = first;

        while let Some(next) = next_change(last + 1) {
            if next - last - 1 > max_gap {
                break;
            }
            last = next;
        }

        let end = last
            .saturating_add(context)
            .saturating_add(1)
            .min(edits.len());
        hunks.push(UnifiedHunk {
            edits: &edits[start..end],
        });
        offset = end;
    }

    hunks
}
