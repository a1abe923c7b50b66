//! Outdenting pipeline.
//!
//! Removes the leading whitespace shared by the lines of a multiline text,
//! typically a snippet cut out of a deeply nested document.
//!
//! # Pipeline Stages
//!
//! 1. **Blank-line collapse** (only when `max_empty_lines` is set) — limit
//!    runs of blank lines.
//! 2. **Split** — divide each line into its leading prefix and remainder.
//! 3. **Canonicalize** — if spaces and tabs are mixed, rewrite every prefix
//!    in the dominant style.
//! 4. **Strip** — measure the shortest prefix among eligible lines and cut
//!    that many characters from every prefix.
//!
//! Every stage is a pure function of its input; nothing is kept between calls.

pub mod blank_lines;
pub mod indent;
pub mod lines;
pub mod whitespace;

use std::borrow::Cow;

use log::debug;
use serde::Serialize;

use crate::options::Options;
use crate::transform::lines::{Line, split_lines};
use crate::transform::whitespace::WhitespaceProfile;

pub use blank_lines::collapse_blank_lines;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// What the pipeline measured for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentReport {
    /// Lines after the optional blank-line collapse.
    pub line_count: usize,
    /// First eligible line index (inclusive).
    pub window_start: usize,
    /// End of the eligible window (exclusive).
    pub window_end: usize,
    /// Eligible lines that are not blank, i.e. those constraining the indent.
    pub constraining_lines: usize,
    /// Leading whitespace before canonicalization.
    pub profile: WhitespaceProfile,
    /// Characters cut from every prefix.
    pub removable: usize,
}

/// Intermediate state shared by [`strip_common_indentation`] and [`analyze`].
struct Measured<'a> {
    lines: Vec<Line<'a>>,
    profile: WhitespaceProfile,
    removable: usize,
}

fn measure<'a>(text: &'a str, options: &Options) -> Measured<'a> {
    let mut lines = split_lines(text);
    let profile = WhitespaceProfile::from_lines(&lines);
    debug!(
        "{} lines, leading whitespace: {} spaces, {} tabs, dominant {}",
        lines.len(),
        profile.spaces,
        profile.tabs,
        profile.dominant
    );

    if profile.is_empty {
        return Measured {
            lines,
            profile,
            removable: 0,
        };
    }

    if profile.is_mixed {
        debug!(
            "mixed indentation, rewriting prefixes as {} (tab width {})",
            profile.dominant,
            options.tab_width()
        );
        whitespace::canonicalize(&mut lines, &profile, options.tab_width());
    }

    let removable = indent::removable_indent(&lines, options.ignore_head(), options.ignore_tail());
    debug!("removable indent: {removable}");

    Measured {
        lines,
        profile,
        removable,
    }
}

fn collapse_if_configured<'a>(text: &'a str, options: &Options) -> Cow<'a, str> {
    match options.max_empty_lines() {
        Some(max) => Cow::Owned(collapse_blank_lines(text, max)),
        None => Cow::Borrowed(text),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Remove the indentation shared by the lines of `text`.
///
/// Runs the blank-line collapse first when `options.max_empty_lines()` is
/// set. Text without any leading whitespace is returned as collapsed.
pub fn strip_common_indentation(text: &str, options: &Options) -> String {
    let text = collapse_if_configured(text, options);
    let measured = measure(&text, options);

    if measured.profile.is_empty {
        return text.to_string();
    }

    indent::strip_indent(&measured.lines, measured.removable)
}

/// Run the pipeline's measurements without producing the text.
pub fn analyze(text: &str, options: &Options) -> IndentReport {
    let text = collapse_if_configured(text, options);
    let measured = measure(&text, options);

    let window = indent::eligible_window(
        measured.lines.len(),
        options.ignore_head(),
        options.ignore_tail(),
    );
    let constraining_lines = measured.lines[window.clone()]
        .iter()
        .filter(|line| !line.is_blank())
        .count();

    IndentReport {
        line_count: measured.lines.len(),
        window_start: window.start,
        window_end: window.end,
        constraining_lines,
        profile: measured.profile,
        removable: measured.removable,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PartialOptions;

    fn options(ignore_head: i64, ignore_tail: i64) -> Options {
        PartialOptions {
            ignore_head: Some(ignore_head),
            ignore_tail: Some(ignore_tail),
            ..Default::default()
        }
        .validate()
    }

    #[test]
    fn strips_shared_indent() {
        assert_eq!(
            strip_common_indentation("    a\n    b\n", &options(0, 0)),
            "a\nb\n"
        );
    }

    #[test]
    fn head_line_is_excluded_by_default() {
        assert_eq!(
            strip_common_indentation("  a\n    b\n", &Options::default()),
            "a\nb\n"
        );
    }

    #[test]
    fn text_without_indent_is_returned_as_is() {
        let text = "a\n\n\nb";
        assert_eq!(strip_common_indentation(text, &Options::default()), text);
    }

    #[test]
    fn collapse_runs_only_when_configured() {
        let text = "  a\n\n\n\n  b\n";
        assert_eq!(
            strip_common_indentation(text, &options(0, 0)),
            "a\n\n\n\nb\n"
        );

        let collapsing = PartialOptions {
            max_empty_lines: Some(1),
            ignore_head: Some(0),
            ..Default::default()
        }
        .validate();
        assert_eq!(strip_common_indentation(text, &collapsing), "a\n\nb\n");
    }

    #[test]
    fn analyze_reports_measurements() {
        let report = analyze("x\n\t a\n    b\n\n", &Options::default());
        assert_eq!(report.line_count, 4);
        assert_eq!((report.window_start, report.window_end), (1, 4));
        assert_eq!(report.constraining_lines, 2);
        assert!(report.profile.is_mixed);
        assert_eq!(report.removable, 4);
    }

    #[test]
    fn analyze_empty_text() {
        let report = analyze("", &Options::default());
        assert_eq!(report.line_count, 0);
        assert_eq!(report.removable, 0);
        assert!(report.profile.is_empty);
    }
}
