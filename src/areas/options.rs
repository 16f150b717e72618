use crate::artifacts::diff::format::DiffMode;
use crate::artifacts::lines::filter::LineFilter;

/// Combined line count above which a diff is refused.
pub const DEFAULT_MAX_LINES: usize = 1_000_000;

/// Everything a command needs to know about how to read, diff and print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub mode: DiffMode,
    pub color: bool,
    pub filter: LineFilter,
    pub strip_cr: bool,
    pub max_lines: usize,
    pub brief: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            mode: DiffMode::Normal,
            color: false,
            filter: LineFilter::default(),
            strip_cr: false,
            max_lines: DEFAULT_MAX_LINES,
            brief: false,
        }
    }
}
