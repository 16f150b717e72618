//! Myers' O(ND) difference algorithm
//!
//! The search walks the edit graph of two sequences one edit distance at a
//! time, recording a full snapshot of the frontier after every round. The
//! reconstruction then walks those snapshots backwards from `(m, n)` to
//! `(0, 0)` to recover the edit script.
//!
//! The insert/delete tie-break decides which of several minimal scripts is
//! produced: an insertion (coming from diagonal `k + 1`) is taken unless the
//! deletion path (from `k - 1`) has reached at least as far. Both the search
//! and the backtrack apply the same rule.

use crate::artifacts::diff::edit::{Edit, EditScript, LineEq, slice_eq};
use crate::errors::{DiffError, DiffResult};
use derive_new::new;

/// Frontier snapshots, one per edit distance.
///
/// `snapshots[d][k + offset]` is the furthest x reached on diagonal `k`
/// after `d` edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    offset: isize,
    snapshots: Vec<Vec<usize>>,
}

impl Trace {
    /// The edit distance of the solution this trace leads to.
    pub fn distance(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn snapshots(&self) -> &[Vec<usize>] {
        &self.snapshots
    }

    fn frontier(&self, d: usize, k: isize) -> DiffResult<usize> {
        self.snapshots
            .get(d)
            .and_then(|v| v.get((self.offset + k) as usize))
            .copied()
            .ok_or_else(|| DiffError::malformed(format!("diagonal {k} is not in snapshot {d}")))
    }
}

pub trait DiffAlgorithm {
    type Trace;

    fn compute_shortest_edit(&self) -> DiffResult<Self::Trace>;
    fn backtrack(&self, trace: Self::Trace) -> DiffResult<EditScript>;

    fn diff(&self) -> DiffResult<EditScript> {
        let trace = self.compute_shortest_edit()?;
        self.backtrack(trace)
    }
}

#[derive(Debug, Clone, new)]
pub struct MyersDiff<E> {
    m: usize,
    n: usize,
    eq: E,
}

/// Whether the step onto diagonal `k` at distance `d` came from `k + 1`.
fn comes_from_insert(v: &[usize], offset: isize, d: isize, k: isize) -> bool {
    let idx = (offset + k) as usize;
    k == -d || (k != d && v[idx - 1] < v[idx + 1])
}

fn snapshot(v: &[usize]) -> DiffResult<Vec<usize>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(v.len())?;
    copy.extend_from_slice(v);
    Ok(copy)
}

impl<E: LineEq> DiffAlgorithm for MyersDiff<E> {
    type Trace = Trace;

    fn compute_shortest_edit(&self) -> DiffResult<Trace> {
        let (m, n) = (self.m as isize, self.n as isize);
        let bound = self.m + self.n;
        let offset = bound as isize;

        let mut v = Vec::new();
        v.try_reserve_exact(2 * bound + 1)?;
        v.resize(2 * bound + 1, 0usize);

        let mut snapshots = Vec::new();

        for d in 0..=offset {
            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if d == 0 {
                    0
                } else if comes_from_insert(&v, offset, d, k) {
                    // moved down from k+1: an insertion
                    v[idx + 1] as isize
                } else {
                    // moved right from k-1: a deletion
                    v[idx - 1] as isize + 1
                };

                let mut y = x - k;
                while x < m && y < n && self.eq.equals(x as usize, y as usize) {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x as usize;

                if x >= m && y >= n {
                    snapshots.try_reserve(1)?;
                    snapshots.push(snapshot(&v)?);
                    tracing::debug!(m = self.m, n = self.n, distance = d, "found shortest edit");
                    return Ok(Trace { offset, snapshots });
                }
            }

            snapshots.try_reserve(1)?;
            snapshots.push(snapshot(&v)?);
            tracing::trace!(round = d, "frontier advanced");
        }

        Err(DiffError::SearchExhausted { bound })
    }

    fn backtrack(&self, trace: Trace) -> DiffResult<EditScript> {
        self.check_shape(&trace)?;

        let (mut x, mut y) = (self.m as isize, self.n as isize);
        let offset = trace.offset;
        let mut edits = Vec::with_capacity(self.m.max(self.n) + trace.distance());

        for d in (1..=trace.distance()).rev() {
            let k = x - y;
            let prev = &trace.snapshots[d - 1];
            let di = d as isize;

            if k < -di || k > di {
                return Err(DiffError::malformed(format!(
                    "diagonal {k} is unreachable with {d} edits"
                )));
            }

            let prev_k = if comes_from_insert(prev, offset, di, k) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = trace.frontier(d - 1, prev_k)? as isize;
            let prev_y = prev_x - prev_k;
            if prev_y < 0 {
                return Err(DiffError::malformed(format!(
                    "predecessor ({prev_x}, {prev_y}) lies outside the edit graph"
                )));
            }

            while x > prev_x && y > prev_y {
                edits.push(Edit::Keep {
                    a: (x - 1) as usize,
                    b: (y - 1) as usize,
                });
                x -= 1;
                y -= 1;
            }

            if x == prev_x && y == prev_y + 1 {
                // only y increased
                edits.push(Edit::Insert {
                    a_pos: x as usize,
                    b: prev_y as usize,
                });
            } else if y == prev_y && x == prev_x + 1 {
                // only x increased
                edits.push(Edit::Delete {
                    a: prev_x as usize,
                    b_pos: y as usize,
                });
            } else {
                return Err(DiffError::malformed(format!(
                    "no single edit leads from ({prev_x}, {prev_y}) to ({x}, {y})"
                )));
            }

            (x, y) = (prev_x, prev_y);
        }

        while x > 0 && y > 0 {
            edits.push(Edit::Keep {
                a: (x - 1) as usize,
                b: (y - 1) as usize,
            });
            x -= 1;
            y -= 1;
        }

        if x != 0 || y != 0 {
            return Err(DiffError::malformed(format!(
                "backtrack stopped at ({x}, {y}) instead of the origin"
            )));
        }

        edits.reverse();
        tracing::debug!(
            operations = edits.len(),
            distance = trace.distance(),
            "reconstructed edit script"
        );

        Ok(EditScript::new(edits))
    }
}

impl<E> MyersDiff<E> {
    /// A trace must come from a search over the same lengths: one slot per
    /// diagonal and no more rounds than the search could run.
    fn check_shape(&self, trace: &Trace) -> DiffResult<()> {
        let bound = self.m + self.n;
        if trace.offset != bound as isize || trace.distance() > bound {
            return Err(DiffError::malformed(format!(
                "trace with offset {} and distance {} does not fit sequences of {} and {} lines",
                trace.offset,
                trace.distance(),
                self.m,
                self.n
            )));
        }

        let width = 2 * bound + 1;
        if let Some((d, v)) = trace
            .snapshots
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != width)
        {
            return Err(DiffError::malformed(format!(
                "snapshot {d} has {} diagonals instead of {width}",
                v.len()
            )));
        }

        Ok(())
    }
}

/// Diffs two line sequences byte-wise.
pub fn diff_lines<T: AsRef<[u8]>>(a: &[T], b: &[T]) -> DiffResult<EditScript> {
    MyersDiff::new(a.len(), b.len(), slice_eq(a, b)).diff()
}
