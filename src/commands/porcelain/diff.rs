use crate::areas::session::Session;
use crate::artifacts::core::Printer;
use crate::artifacts::diff::format::HunkFormatter;
use crate::artifacts::diff::myers::diff_lines;
use crate::errors::DiffError;
use std::path::Path;

/// Result of comparing two inputs, mapped onto diff's exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Identical,
    Different,
}

impl DiffStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            DiffStatus::Identical => 0,
            DiffStatus::Different => 1,
        }
    }
}

impl Session {
    pub fn diff(&self, a_path: &Path, b_path: &Path) -> anyhow::Result<DiffStatus> {
        let options = self.options();
        let a = self
            .workspace()
            .read_lines(a_path, options.strip_cr, &options.filter)?;
        let b = self
            .workspace()
            .read_lines(b_path, options.strip_cr, &options.filter)?;

        let lines = a.len() + b.len();
        if lines > options.max_lines {
            return Err(DiffError::InputTooLarge {
                lines,
                limit: options.max_lines,
            }
            .into());
        }

        let script = diff_lines(&a, &b)?;
        let status = if script.is_identity() {
            DiffStatus::Identical
        } else {
            DiffStatus::Different
        };
        tracing::info!(distance = script.distance(), ?status, "compared inputs");

        if options.brief {
            self.print_verdict(a_path, b_path, status)?;
            return Ok(status);
        }

        let formatter = HunkFormatter::new(&a, &b, options.mode).with_labels(
            a_path.display().to_string(),
            b_path.display().to_string(),
        );
        self.with_printer(|printer| Ok(formatter.format(&script, printer)?))?;

        Ok(status)
    }

    fn print_verdict(&self, a_path: &Path, b_path: &Path, status: DiffStatus) -> anyhow::Result<()> {
        let verdict = match status {
            DiffStatus::Identical => "are identical",
            DiffStatus::Different => "differ",
        };
        let line = format!(
            "Files {} and {} {verdict}",
            a_path.display(),
            b_path.display()
        );

        self.with_printer(|printer| Ok(printer.emit_raw(line.as_bytes())?))
    }
}
