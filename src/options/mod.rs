//! Option validation.
//!
//! Callers hand over a partial, loosely-checked set of values (CLI flags, a
//! TOML section, a JSON object). Validation turns it into a fully-populated
//! [`Options`] value:
//!
//! - a supplied number is passed through the field's filter (floor + clamp);
//! - a missing or wrongly-typed value falls back to the field default, which
//!   is not re-filtered;
//! - unknown keys are ignored.
//!
//! Validation never fails. The only error in the crate lives at the request
//! boundary (see [`crate::request`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Per-field rules
// ---------------------------------------------------------------------------

/// Upper bound for `max_empty_lines`.
pub const MAX_EMPTY_LINES_LIMIT: usize = 50;

/// Default, lower bound and upper bound of one integer option.
#[derive(Debug, Clone, Copy)]
struct OptionRule {
    default: usize,
    min: usize,
    max: usize,
}

impl OptionRule {
    /// Use the candidate if present (clamped into range), else the default.
    fn resolve(self, candidate: Option<i64>) -> usize {
        candidate.map_or(self.default, |value| self.filter(value))
    }

    fn filter(self, value: i64) -> usize {
        clamp(value, self.min, self.max)
    }
}

const IGNORE_HEAD: OptionRule = OptionRule {
    default: 1,
    min: 0,
    max: 4,
};

const IGNORE_TAIL: OptionRule = OptionRule {
    default: 0,
    min: 0,
    max: 4,
};

const TAB_WIDTH: OptionRule = OptionRule {
    default: 4,
    min: 1,
    max: 8,
};

/// Clamp an integer into `[min, max]`.
pub fn clamp(value: i64, min: usize, max: usize) -> usize {
    // Bounds are tiny; the casts cannot truncate.
    value.clamp(min as i64, max as i64) as usize
}

/// Filter for the blank-line limit: clamp into `[0, 50]`.
pub fn clamp_max_empty_lines(value: i64) -> usize {
    clamp(value, 0, MAX_EMPTY_LINES_LIMIT)
}

// ---------------------------------------------------------------------------
// Partial (caller-supplied) options
// ---------------------------------------------------------------------------

/// Caller-supplied option values, any of which may be missing.
///
/// Deserializes from the `[outdent]` config section (snake_case) and from
/// JSON objects using the camelCase names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    #[serde(alias = "maxEmptyLines", skip_serializing_if = "Option::is_none")]
    pub max_empty_lines: Option<i64>,
    #[serde(alias = "ignoreHead", skip_serializing_if = "Option::is_none")]
    pub ignore_head: Option<i64>,
    #[serde(alias = "ignoreTail", skip_serializing_if = "Option::is_none")]
    pub ignore_tail: Option<i64>,
    #[serde(alias = "tabWidth", skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<i64>,
}

impl PartialOptions {
    /// Read options out of an arbitrary JSON value.
    ///
    /// Anything other than an object is treated as `{}`. Within an object,
    /// only numeric values of recognized keys are picked up; fractional
    /// numbers are floored.
    pub fn from_value(bag: &Value) -> Self {
        let Some(map) = bag.as_object() else {
            return Self::default();
        };

        Self {
            max_empty_lines: number_field(map, "maxEmptyLines", "max_empty_lines"),
            ignore_head: number_field(map, "ignoreHead", "ignore_head"),
            ignore_tail: number_field(map, "ignoreTail", "ignore_tail"),
            tab_width: number_field(map, "tabWidth", "tab_width"),
        }
    }

    /// Layer `overlay` on top of `self`; values set in the overlay win.
    pub fn merge(self, overlay: PartialOptions) -> Self {
        Self {
            max_empty_lines: overlay.max_empty_lines.or(self.max_empty_lines),
            ignore_head: overlay.ignore_head.or(self.ignore_head),
            ignore_tail: overlay.ignore_tail.or(self.ignore_tail),
            tab_width: overlay.tab_width.or(self.tab_width),
        }
    }

    /// Produce the validated configuration.
    pub fn validate(self) -> Options {
        Options {
            max_empty_lines: self.max_empty_lines.map(clamp_max_empty_lines),
            ignore_head: IGNORE_HEAD.resolve(self.ignore_head),
            ignore_tail: IGNORE_TAIL.resolve(self.ignore_tail),
            tab_width: TAB_WIDTH.resolve(self.tab_width),
        }
    }
}

/// Look up a numeric field under its camelCase name, then its snake_case one.
fn number_field(map: &Map<String, Value>, camel: &str, snake: &str) -> Option<i64> {
    let value = map.get(camel).or_else(|| map.get(snake))?;
    number_value(value)
}

/// Floor a JSON number to an integer. Non-numbers yield `None`.
pub(crate) fn number_value(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    // `as` saturates at the i64 bounds, which the clamp then handles.
    Some(n.floor() as i64)
}

// ---------------------------------------------------------------------------
// Validated options
// ---------------------------------------------------------------------------

/// Fully validated configuration for one transformation.
///
/// Only constructible through [`PartialOptions::validate`] or
/// [`Options::default`], so every field is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_empty_lines: Option<usize>,
    ignore_head: usize,
    ignore_tail: usize,
    tab_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        PartialOptions::default().validate()
    }
}

impl Options {
    /// Blank-line limit for the collapse pre-pass; `None` skips the pre-pass.
    pub fn max_empty_lines(&self) -> Option<usize> {
        self.max_empty_lines
    }

    /// Lines at the start excluded from the minimum-indent computation.
    pub fn ignore_head(&self) -> usize {
        self.ignore_head
    }

    /// Lines at the end excluded from the minimum-indent computation.
    pub fn ignore_tail(&self) -> usize {
        self.ignore_tail
    }

    /// Visual width of one tab when reconciling mixed indentation.
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }
}

impl From<PartialOptions> for Options {
    fn from(partial: PartialOptions) -> Self {
        partial.validate()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
