use crate::artifacts::core::{Printer, StyleClass};
use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::hunk::{Command, DEFAULT_CONTEXT, normal_hunks, unified_hunks};
use crate::errors::{DiffError, DiffResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    #[default]
    Normal,
    Unified { context: usize },
}

impl DiffMode {
    pub fn unified() -> Self {
        DiffMode::Unified {
            context: DEFAULT_CONTEXT,
        }
    }
}

/// What a formatting call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSummary {
    pub hunks: usize,
}

impl FormatSummary {
    pub fn has_differences(&self) -> bool {
        self.hunks > 0
    }
}

/// Renders an edit script against the two sequences it was computed from.
pub struct HunkFormatter<'d, T> {
    a: &'d [T],
    b: &'d [T],
    mode: DiffMode,
    labels: Option<(String, String)>,
}

impl<'d, T: AsRef<[u8]>> HunkFormatter<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T], mode: DiffMode) -> Self {
        HunkFormatter {
            a,
            b,
            mode,
            labels: None,
        }
    }

    /// Names printed in the `---`/`+++` header of a non-empty unified diff.
    pub fn with_labels(mut self, a_label: impl Into<String>, b_label: impl Into<String>) -> Self {
        self.labels = Some((a_label.into(), b_label.into()));
        self
    }

    pub fn format(&self, script: &EditScript, printer: &mut dyn Printer) -> DiffResult<FormatSummary> {
        self.validate(script)?;

        if let (DiffMode::Unified { .. }, Some((a_label, b_label))) = (self.mode, &self.labels)
            && !script.is_identity()
        {
            printer.emit(format!("--- {a_label}").as_bytes(), StyleClass::Header)?;
            printer.emit(format!("+++ {b_label}").as_bytes(), StyleClass::Header)?;
        }

        let summary = match self.mode {
            DiffMode::Normal => self.format_normal(script, printer)?,
            DiffMode::Unified { context } => self.format_unified(script, context, printer)?,
        };

        tracing::debug!(hunks = summary.hunks, mode = ?self.mode, "formatted diff");
        Ok(summary)
    }

    /// Checks every operation against the sequences before anything is
    /// printed, so a broken script never produces partial output.
    fn validate(&self, script: &EditScript) -> DiffResult<()> {
        let (m, n) = (self.a.len(), self.b.len());

        for edit in script.edits() {
            let in_bounds = match *edit {
                Edit::Keep { a, b } => a < m && b < n,
                Edit::Insert { a_pos, b } => a_pos <= m && b < n,
                Edit::Delete { a, b_pos } => a < m && b_pos <= n,
            };
            if !in_bounds {
                return Err(DiffError::malformed(format!(
                    "operation {edit} is outside sequences of {m} and {n} lines"
                )));
            }
        }

        Ok(())
    }

    fn format_normal(&self, script: &EditScript, printer: &mut dyn Printer) -> DiffResult<FormatSummary> {
        let hunks = normal_hunks(script.edits());

        for hunk in &hunks {
            let command = hunk.command();
            let header = format!("{}{}{}", hunk.a_range(), command.letter(), hunk.b_range());
            printer.emit(header.as_bytes(), StyleClass::Header)?;

            for i in hunk.deleted() {
                printer.emit(&prefixed(b"< ", self.a[i].as_ref()), StyleClass::Deleted)?;
            }
            if command == Command::Change {
                printer.emit_raw(b"---")?;
            }
            for j in hunk.inserted() {
                printer.emit(&prefixed(b"> ", self.b[j].as_ref()), StyleClass::Inserted)?;
            }
        }

        Ok(FormatSummary { hunks: hunks.len() })
    }

    fn format_unified(
        &self,
        script: &EditScript,
        context: usize,
        printer: &mut dyn Printer,
    ) -> DiffResult<FormatSummary> {
        let hunks = unified_hunks(script.edits(), context);

        for hunk in &hunks {
            let header = format!(
                "@@ -{} +{} @@",
                unified_range(hunk.a_start(), hunk.a_size()),
                unified_range(hunk.b_start(), hunk.b_size())
            );
            printer.emit(header.as_bytes(), StyleClass::Header)?;

            for edit in hunk.edits() {
                match *edit {
                    Edit::Keep { a, .. } => printer.emit_raw(&prefixed(b" ", self.a[a].as_ref()))?,
                    Edit::Delete { a, .. } => {
                        printer.emit(&prefixed(b"-", self.a[a].as_ref()), StyleClass::Deleted)?
                    }
                    Edit::Insert { b, .. } => {
                        printer.emit(&prefixed(b"+", self.b[b].as_ref()), StyleClass::Inserted)?
                    }
                }
            }
        }

        Ok(FormatSummary { hunks: hunks.len() })
    }
}

/// `start,len`, shortened to `start` for a single line.
fn unified_range(start: usize, len: usize) -> String {
    if len == 1 {
        start.to_string()
    } else {
        format!("{start},{len}")
    }
}

fn prefixed(prefix: &[u8], line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + line.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(line);
    out
}
