use crate::areas::options::DiffOptions;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::WritePrinter;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    workspace: Workspace,
    options: DiffOptions,
}

impl Session {
    pub fn new(path: &str, writer: Box<dyn Write>, options: DiffOptions) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            options,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Runs `f` with a printer over the session writer, colored as configured.
    pub fn with_printer<R>(
        &self,
        f: impl FnOnce(&mut WritePrinter<&mut Box<dyn Write>>) -> anyhow::Result<R>,
    ) -> anyhow::Result<R> {
        let mut writer = self.writer();
        let mut printer = WritePrinter::new(&mut *writer, self.options.color);
        let result = f(&mut printer)?;
        writer.flush()?;
        Ok(result)
    }
}
