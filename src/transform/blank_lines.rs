//! Blank-line collapsing.
//!
//! Limits runs of blank (empty or whitespace-only) lines to a maximum count.
//! Two passes are needed because a run between two content lines is bounded
//! by one more terminator than a run at the start or end of the text:
//!
//! - **Interior** — `N` blank lines between content lines are `N + 1`
//!   terminators. Any run of at least `max + 2` whitespace-then-terminator
//!   groups becomes exactly `max + 1` terminators.
//! - **Boundary** — a run anchored at the start of the text, or running into
//!   the end of it, becomes exactly `max` terminators.

use std::sync::OnceLock;

use log::debug;
use regex::{NoExpand, Regex};

use crate::options::MAX_EMPTY_LINES_LIMIT;

// ---------------------------------------------------------------------------
// Compiled regexes (one pair per limit, compiled on first use)
// ---------------------------------------------------------------------------

struct CollapsePatterns {
    interior: Regex,
    boundary: Regex,
}

static PATTERNS: [OnceLock<CollapsePatterns>; MAX_EMPTY_LINES_LIMIT + 1] =
    [const { OnceLock::new() }; MAX_EMPTY_LINES_LIMIT + 1];

/// Optional spaces/tabs followed by a line terminator.
const BLANK_GROUP: &str = r"[ \t]*\r?\n";

fn patterns(max_empty_lines: usize) -> &'static CollapsePatterns {
    PATTERNS[max_empty_lines].get_or_init(|| {
        let interior = format!("(?:{BLANK_GROUP}){{{},}}", max_empty_lines + 2);
        let boundary = format!(
            r"(?:^|{BLANK_GROUP})(?:{BLANK_GROUP}){{{max_empty_lines},}}[ \t]*(?:\r?\n|$)"
        );
        CollapsePatterns {
            interior: Regex::new(&interior).expect("interior blank-line regex must compile"),
            boundary: Regex::new(&boundary).expect("boundary blank-line regex must compile"),
        }
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Collapse runs of blank lines to at most `max_empty_lines`.
///
/// Values above 50 are clamped. Rewritten runs use `\r\n` when the text
/// contains any `\r\n`, otherwise `\n`.
pub fn collapse_blank_lines(text: &str, max_empty_lines: usize) -> String {
    let max = max_empty_lines.min(MAX_EMPTY_LINES_LIMIT);
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let patterns = patterns(max);

    let interior = newline.repeat(max + 1);
    let text = patterns.interior.replace_all(text, NoExpand(&interior));

    let boundary = newline.repeat(max);
    let text = patterns.boundary.replace_all(&text, NoExpand(&boundary));

    debug!(
        "collapsed blank lines (max={max}): {} bytes out",
        text.len()
    );
    text.into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_interior_run_to_limit() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n", 1), "a\n\nb\n");
        assert_eq!(collapse_blank_lines("a\n\n\n\n\n\nb\n", 2), "a\n\n\nb\n");
    }

    #[test]
    fn keeps_runs_within_limit() {
        assert_eq!(collapse_blank_lines("a\n\nb\n", 1), "a\n\nb\n");
        assert_eq!(collapse_blank_lines("a\n\n\nb\n", 2), "a\n\n\nb\n");
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        assert_eq!(collapse_blank_lines("a\n  \n\t\n \t \nb\n", 1), "a\n\nb\n");
    }

    #[test]
    fn zero_limit_joins_content_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\nb", 0), "a\nb");
    }

    #[test]
    fn leading_run_keeps_exactly_limit_terminators() {
        assert_eq!(collapse_blank_lines("\n\n\n\na\n", 1), "\na\n");
        assert_eq!(collapse_blank_lines("\n\n\n\na\n", 2), "\n\na\n");
    }

    #[test]
    fn trailing_run_is_bounded_by_limit() {
        // The content line's own terminator is part of the run.
        assert_eq!(collapse_blank_lines("a\n\n\n", 1), "a\n");
        assert_eq!(collapse_blank_lines("a\n\n\n\n\n", 2), "a\n\n");
    }

    #[test]
    fn trailing_whitespace_line_without_terminator() {
        assert_eq!(collapse_blank_lines("a\n   ", 0), "a");
    }

    #[test]
    fn limit_above_range_is_clamped() {
        let text = format!("a{}b", "\n".repeat(60));
        let out = collapse_blank_lines(&text, 500);
        assert_eq!(out, format!("a{}b", "\n".repeat(51)));
    }

    #[test]
    fn crlf_runs_are_rewritten_with_crlf() {
        assert_eq!(
            collapse_blank_lines("a\r\n\r\n\r\n\r\nb\r\n", 1),
            "a\r\n\r\nb\r\n"
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(collapse_blank_lines("", 0), "");
        assert_eq!(collapse_blank_lines("", 3), "");
    }

    #[test]
    fn text_without_blank_lines_is_unchanged() {
        let text = "fn main() {\n    run();\n}";
        assert_eq!(collapse_blank_lines(text, 1), text);
    }
}
