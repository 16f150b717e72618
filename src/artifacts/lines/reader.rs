use bstr::{BString, ByteSlice};

/// Splits raw bytes into lines on `\n`.
///
/// The terminator is not part of the line, and a final terminator does not
/// start an extra empty line. With `strip_cr`, a `\r` left at the end of a
/// line is removed as well.
pub fn split_lines(data: &[u8], strip_cr: bool) -> Vec<BString> {
    if data.is_empty() {
        return Vec::new();
    }

    let data = data.strip_suffix(b"\n").unwrap_or(data);

    data.split_str("\n")
        .map(|line| {
            let line = if strip_cr {
                line.strip_suffix(b"\r").unwrap_or(line)
            } else {
                line
            };
            BString::from(line)
        })
        .collect()
}
