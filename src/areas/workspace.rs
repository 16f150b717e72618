use crate::artifacts::lines::filter::LineFilter;
use crate::artifacts::lines::reader::split_lines;
use anyhow::Context;
use bstr::BString;
use std::cell::RefCell;
use std::io::Read;
use std::path::Path;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    stdin: RefCell<Option<Vec<u8>>>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace {
            path,
            stdin: RefCell::new(None),
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        if file_path == Path::new(STDIN_PATH) {
            return self.read_stdin(std::io::stdin().lock());
        }

        let full_path = self.path.join(file_path);
        if full_path.is_dir() {
            anyhow::bail!("{} is a directory", file_path.display());
        }

        std::fs::read(&full_path).with_context(|| format!("Failed to read {}", file_path.display()))
    }

    /// Standard input can only be drained once; later reads get the same bytes.
    fn read_stdin(&self, mut input: impl Read) -> anyhow::Result<Vec<u8>> {
        let mut cached = self.stdin.borrow_mut();
        if let Some(content) = cached.as_ref() {
            return Ok(content.clone());
        }

        let mut content = Vec::new();
        input
            .read_to_end(&mut content)
            .context("Failed to read standard input")?;
        *cached = Some(content.clone());

        Ok(content)
    }

    /// Reads a file and turns it into the line sequence the diff core sees.
    pub fn read_lines(
        &self,
        file_path: &Path,
        strip_cr: bool,
        filter: &LineFilter,
    ) -> anyhow::Result<Vec<BString>> {
        let content = self.read_file(file_path)?;
        let lines = filter.apply(split_lines(&content, strip_cr));

        tracing::info!(file = %file_path.display(), lines = lines.len(), "read input");
        Ok(lines)
    }
}
