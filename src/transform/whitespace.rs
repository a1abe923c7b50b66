//! Whitespace profiling and canonicalization.
//!
//! Before the shared indent can be measured, every leading prefix has to use
//! the same indentation character. The profile counts spaces and tabs over
//! all prefixes combined; when both occur, each prefix is rewritten to the
//! dominant style.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::transform::lines::Line;
use crate::utils::repeat;

/// A tab outweighs this many spaces when picking the dominant style.
const TAB_WEIGHT: usize = 3;

/// Indentation character a document is judged to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces => write!(f, "spaces"),
            Self::Tabs => write!(f, "tabs"),
        }
    }
}

/// Summary of the leading whitespace across all lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WhitespaceProfile {
    pub spaces: usize,
    pub tabs: usize,
    /// No line has any leading whitespace.
    pub is_empty: bool,
    /// At least one space and at least one tab occur.
    pub is_mixed: bool,
    pub dominant: IndentStyle,
}

impl WhitespaceProfile {
    pub fn from_prefixes<'p>(prefixes: impl IntoIterator<Item = &'p str>) -> Self {
        let (spaces, tabs) = prefixes
            .into_iter()
            .flat_map(str::chars)
            .fold((0, 0), |(spaces, tabs), ch| match ch {
                ' ' => (spaces + 1, tabs),
                '\t' => (spaces, tabs + 1),
                _ => (spaces, tabs),
            });

        // Ties go to spaces.
        let dominant = if tabs * TAB_WEIGHT > spaces {
            IndentStyle::Tabs
        } else {
            IndentStyle::Spaces
        };

        Self {
            spaces,
            tabs,
            is_empty: spaces + tabs == 0,
            is_mixed: spaces > 0 && tabs > 0,
            dominant,
        }
    }

    pub fn from_lines(lines: &[Line<'_>]) -> Self {
        Self::from_prefixes(lines.iter().map(|line| line.prefix.as_ref()))
    }
}

/// Rewrite one prefix in the given style.
///
/// - To spaces: each tab becomes `tab_width` spaces.
/// - To tabs: the prefix's visual width (tabs expanded) is divided by
///   `tab_width` and rounded half-up, giving the number of tabs. Widths that
///   are not a multiple of `tab_width` lose precision.
///
/// Prefixes already in the target style are returned untouched.
pub fn canonicalize_prefix(prefix: &str, style: IndentStyle, tab_width: usize) -> Cow<'_, str> {
    match style {
        IndentStyle::Spaces if prefix.contains('\t') => {
            Cow::Owned(prefix.replace('\t', &repeat(' ', tab_width)))
        }
        IndentStyle::Tabs if prefix.contains(' ') => {
            let tabs = prefix.chars().filter(|&ch| ch == '\t').count();
            let width = prefix.len() - tabs + tabs * tab_width;
            let count = (2 * width + tab_width) / (2 * tab_width);
            Cow::Owned(repeat('\t', count))
        }
        _ => Cow::Borrowed(prefix),
    }
}

/// Bring every line's prefix into the profile's dominant style.
///
/// Does nothing unless the profile is mixed.
pub fn canonicalize(lines: &mut [Line<'_>], profile: &WhitespaceProfile, tab_width: usize) {
    if !profile.is_mixed {
        return;
    }
    for line in lines.iter_mut() {
        let rewritten = match canonicalize_prefix(&line.prefix, profile.dominant, tab_width) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        if let Some(rewritten) = rewritten {
            line.prefix = Cow::Owned(rewritten);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
