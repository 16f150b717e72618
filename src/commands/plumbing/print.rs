use crate::areas::session::Session;
use crate::artifacts::core::Printer;
use std::path::Path;

impl Session {
    /// Prints a single input after line splitting and filtering, one line
    /// per output line.
    pub fn print_file(&self, path: &Path) -> anyhow::Result<()> {
        let options = self.options();
        let lines = self
            .workspace()
            .read_lines(path, options.strip_cr, &options.filter)?;

        self.with_printer(|printer| {
            for line in &lines {
                printer.emit_raw(line)?;
            }
            Ok(())
        })
    }
}
