use outdent::transform::whitespace::{IndentStyle, WhitespaceProfile};
use outdent::{Options, PartialOptions, analyze, collapse_blank_lines, strip_common_indentation};

fn opts(ignore_head: i64, ignore_tail: i64) -> Options {
    PartialOptions {
        ignore_head: Some(ignore_head),
        ignore_tail: Some(ignore_tail),
        ..Default::default()
    }
    .validate()
}

// ---------------------------------------------------------------------------
// Documented examples
// ---------------------------------------------------------------------------

#[test]
fn strips_uniform_indent_with_no_margins() {
    assert_eq!(strip_common_indentation("    a\n    b\n", &opts(0, 0)), "a\nb\n");
}

#[test]
fn default_options_skip_first_line_when_measuring() {
    // removable = 4 from the second line; the first line's 2-space prefix
    // is shorter than that and ends up empty.
    assert_eq!(
        strip_common_indentation("  a\n    b\n", &Options::default()),
        "a\nb\n"
    );
}

#[test]
fn collapses_interior_blank_lines() {
    assert_eq!(collapse_blank_lines("a\n\n\n\nb\n", 1), "a\n\nb\n");
}

#[test]
fn mixed_indent_expands_tabs_when_spaces_dominate() {
    let text = "\t a\n    b\n";
    let report = analyze(text, &Options::default());
    assert_eq!(report.profile.tabs, 1);
    assert_eq!(report.profile.spaces, 5);
    assert_eq!(report.profile.dominant, IndentStyle::Spaces);
    assert_eq!(report.removable, 4);

    assert_eq!(strip_common_indentation(text, &Options::default()), " a\nb\n");
    assert_eq!(strip_common_indentation(text, &opts(0, 0)), " a\nb\n");
}

#[test]
fn one_tab_and_three_spaces_resolve_to_spaces() {
    let profile = WhitespaceProfile::from_prefixes(["\t", "   "]);
    assert_eq!(profile.dominant, IndentStyle::Spaces);
}

// ---------------------------------------------------------------------------
// Realistic snippets
// ---------------------------------------------------------------------------

#[test]
fn outdents_markup_dump() {
    let text = "<pre>\n            <code>\n              let x = 1;\n            </code>\n          </pre>\n";
    let out = strip_common_indentation(text, &Options::default());
    assert_eq!(
        out,
        "<pre>\n  <code>\n    let x = 1;\n  </code>\n</pre>\n"
    );
}

#[test]
fn tab_indented_snippet_with_stray_spaces() {
    // 4 tabs vs 2 spaces: tabs dominate, the stray spaces round up to a tab.
    let text = "\t\ta\n\t\t  b\n";
    assert_eq!(strip_common_indentation(text, &opts(0, 0)), "a\n\tb\n");
}

#[test]
fn collapse_pre_pass_then_strip() {
    let options = PartialOptions {
        max_empty_lines: Some(1),
        ignore_head: Some(0),
        ..Default::default()
    }
    .validate();
    let text = "\n\n\n    a\n\n\n\n      b\n";
    assert_eq!(strip_common_indentation(text, &options), "\na\n\n  b\n");
}

#[test]
fn crlf_terminators_survive() {
    let text = "    a\r\n      b\r\n";
    assert_eq!(strip_common_indentation(text, &opts(0, 0)), "a\r\n  b\r\n");
}

#[test]
fn blank_lines_do_not_constrain_indent() {
    let text = "    a\n\n  \n    b\n";
    assert_eq!(strip_common_indentation(text, &opts(0, 0)), "a\n\n\nb\n");
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn empty_text() {
    assert_eq!(strip_common_indentation("", &Options::default()), "");
    assert_eq!(collapse_blank_lines("", 2), "");
}

#[test]
fn single_line_uses_its_own_prefix_when_eligible() {
    assert_eq!(strip_common_indentation("    solo", &opts(0, 0)), "solo");
    assert_eq!(strip_common_indentation("    solo", &Options::default()), "    solo");
}

#[test]
fn inverted_window_removes_nothing() {
    let text = "    a\n    b\n    c\n";
    assert_eq!(strip_common_indentation(text, &opts(2, 2)), text);
    assert_eq!(strip_common_indentation(text, &opts(4, 4)), text);
}

#[test]
fn only_blank_lines_in_window_removes_nothing() {
    let text = "    a\n   \n";
    assert_eq!(strip_common_indentation(text, &Options::default()), text);
}

#[test]
fn no_leading_whitespace_returns_text_unchanged() {
    let text = "a\n\nb\n";
    assert_eq!(strip_common_indentation(text, &opts(0, 0)), text);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const SAMPLES: &[&str] = &[
    "    fn main() {\n        run();\n    }\n",
    "<pre>\n      a\n        b\n      c\n",
    "\t\ta\n\t\t  b\n",
    "  x\n\n    y\n      z",
    "\n\n  lead\n  trail\n\n\n",
];

#[test]
fn stripping_is_idempotent() {
    for options in [Options::default(), opts(0, 0), opts(1, 1)] {
        for text in SAMPLES {
            let once = strip_common_indentation(text, &options);
            let twice = strip_common_indentation(&once, &options);
            assert_eq!(once, twice, "not idempotent for {text:?} with {options:?}");
        }
    }
}

#[test]
fn lines_lose_at_most_the_removable_width() {
    // Uniform (unmixed) inputs, so canonicalization leaves lengths alone.
    let samples = [
        "    fn main() {\n        run();\n    }\n",
        "  x\n\n    y\n      z",
        "\t\t\ta\n\tb\n\t\tc\n",
    ];
    for text in samples {
        let options = opts(0, 0);
        let removable = analyze(text, &options).removable;
        let out = strip_common_indentation(text, &options);

        let before: Vec<&str> = text.split_inclusive('\n').collect();
        let after: Vec<&str> = out.split_inclusive('\n').collect();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert!(a.len() + removable >= b.len(), "{b:?} -> {a:?}");
            assert!(a.len() <= b.len());
        }
    }
}

/// Longest run of blank lines at the start, in the interior and at the end.
fn blank_runs(text: &str) -> (usize, usize, usize) {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let blank: Vec<bool> = lines.iter().map(|l| l.trim().is_empty()).collect();

    let leading = blank.iter().take_while(|b| **b).count();
    let trailing = blank.iter().rev().take_while(|b| **b).count();

    let mut interior = 0;
    let mut run = 0;
    for (i, is_blank) in blank.iter().enumerate() {
        if *is_blank && i >= leading && i < blank.len().saturating_sub(trailing) {
            run += 1;
            interior = interior.max(run);
        } else {
            run = 0;
        }
    }
    (leading, interior, trailing)
}

#[test]
fn collapse_bounds_every_blank_run() {
    let texts = [
        "\n\n\n  \na\n\n\n\n\tb\n \n\n\n",
        "a\n\n\n\n\n\n\nb\n\n\nc",
        "\n\n\n\n\n",
        "x\r\n\r\n\r\n\r\ny\r\n",
    ];
    for text in texts {
        for max in 0..=3 {
            let out = collapse_blank_lines(text, max);
            let (leading, interior, trailing) = blank_runs(&out);
            assert!(leading <= max, "leading {leading} > {max} in {out:?}");
            assert!(interior <= max, "interior {interior} > {max} in {out:?}");
            assert!(trailing <= max, "trailing {trailing} > {max} in {out:?}");
        }
    }
}

#[test]
fn collapse_keeps_content_lines() {
    let text = "a\n\n\n\n\n\n\nb\n\n\nc";
    for max in 0..=3 {
        let out = collapse_blank_lines(text, max);
        let content: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(content, ["a", "b", "c"]);
    }
}
