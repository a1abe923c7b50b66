//! Line splitting.
//!
//! Each line is kept whole, terminator included, and divided into its
//! leading prefix (the run of spaces and tabs at the start) and the
//! remainder. `prefix + remainder` always reproduces the original line.

use std::borrow::Cow;

/// One line of input, split at the end of its leading whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Leading spaces/tabs. Owned once canonicalization rewrites it.
    pub prefix: Cow<'a, str>,
    /// Everything after the prefix, including the line terminator.
    pub remainder: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(line: &'a str) -> Self {
        let end = line
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(line.len());
        Self {
            prefix: Cow::Borrowed(&line[..end]),
            remainder: &line[end..],
        }
    }

    /// True when nothing but whitespace follows the prefix.
    pub fn is_blank(&self) -> bool {
        self.remainder.trim().is_empty()
    }
}

/// Split text into lines, each ending after its `\n` (so `\r\n` stays in
/// the remainder). A final line without terminator is still a line; an empty
/// text has no lines.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split_inclusive('\n').map(Line::new).collect()
}

/// Concatenate lines back into text.
pub fn join_lines(lines: &[Line<'_>]) -> String {
    let capacity = lines
        .iter()
        .map(|line| line.prefix.len() + line.remainder.len())
        .sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(&line.prefix);
        out.push_str(line.remainder);
    }
    out
}
