use bstr::{BString, ByteSlice};
use derive_new::new;

/// Drops marker lines and, optionally, whitespace-only lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct LineFilter {
    marker: Option<BString>,
    skip_empty: bool,
}

impl LineFilter {
    /// Builds a filter from a marker as typed on the command line.
    ///
    /// One pair of surrounding quotes is removed; a marker that is empty
    /// afterwards disables marker filtering.
    pub fn from_args(marker: Option<&str>, skip_empty: bool) -> Self {
        let marker = marker
            .map(strip_quotes)
            .filter(|marker| !marker.is_empty())
            .map(BString::from);

        LineFilter::new(marker, skip_empty)
    }

    pub fn is_active(&self) -> bool {
        self.marker.is_some() || self.skip_empty
    }

    pub fn keeps(&self, line: &[u8]) -> bool {
        if self.skip_empty && line.trim().is_empty() {
            return false;
        }

        match &self.marker {
            Some(marker) => !line.trim_start().starts_with(marker.as_slice()),
            None => true,
        }
    }

    pub fn apply(&self, lines: Vec<BString>) -> Vec<BString> {
        if !self.is_active() {
            return lines;
        }

        let before = lines.len();
        let kept = lines
            .into_iter()
            .filter(|line| self.keeps(line))
            .collect::<Vec<_>>();
        tracing::debug!(before, after = kept.len(), "filtered lines");

        kept
    }
}

fn strip_quotes(marker: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&quote| {
            marker
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(marker)
}
