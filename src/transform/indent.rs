//! Indentation stripping.
//!
//! The removable indent is the shortest prefix among the eligible lines:
//! those inside the window `[ignore_head, len - ignore_tail)` that are not
//! blank. The same number of characters is then cut from every line's
//! prefix, eligible or not. A prefix shorter than the cut simply becomes
//! empty.

use std::ops::Range;

use crate::transform::lines::Line;

/// Line indices considered for the minimum, before blank lines are dropped.
///
/// Empty when the head and tail margins cover every line.
pub fn eligible_window(line_count: usize, ignore_head: usize, ignore_tail: usize) -> Range<usize> {
    let end = line_count.saturating_sub(ignore_tail);
    if ignore_head >= end {
        return 0..0;
    }
    ignore_head..end
}

/// Width of the indent shared by all eligible, non-blank lines.
///
/// Zero when no line qualifies.
pub fn removable_indent(lines: &[Line<'_>], ignore_head: usize, ignore_tail: usize) -> usize {
    let window = eligible_window(lines.len(), ignore_head, ignore_tail);
    lines[window]
        .iter()
        .filter(|line| !line.is_blank())
        .map(|line| line.prefix.len())
        .min()
        .unwrap_or(0)
}

/// Reassemble the text with `removable` characters cut from every prefix.
pub fn strip_indent(lines: &[Line<'_>], removable: usize) -> String {
    let mut out = String::new();
    for line in lines {
        // Prefixes are ASCII, so any index is a char boundary.
        out.push_str(line.prefix.get(removable..).unwrap_or(""));
        out.push_str(line.remainder);
    }
    out
}
