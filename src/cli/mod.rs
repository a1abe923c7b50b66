//! CLI command implementations.
//!
//! Provides subcommand handlers for:
//! - `outdent strip [FILE]` — remove shared indentation
//! - `outdent collapse [FILE]` — limit runs of blank lines
//! - `outdent inspect [FILE]` — show what the pipeline measures
//! - `outdent config show|init|set|reset` — configuration management

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{self, OutdentConfig};
use crate::options::{Options, PartialOptions};
use crate::transform::{self, IndentReport};

/// Output format for `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s {
            Some("json") => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Blank-line limit for `collapse` when neither flag nor config sets one.
const DEFAULT_COLLAPSE_LIMIT: i64 = 1;

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// Read the input text from `path`, or stdin when absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed reading text from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(text: &str) -> Result<()> {
    std::io::stdout()
        .write_all(text.as_bytes())
        .context("failed writing to stdout")
}

/// Layer command-line flags over the loaded configuration.
pub fn resolve_options(config: &OutdentConfig, flags: PartialOptions) -> Options {
    config.outdent.merge(flags).validate()
}

// ---------------------------------------------------------------------------
// outdent strip
// ---------------------------------------------------------------------------

/// Remove shared indentation and print the result.
pub fn run_strip(config: &OutdentConfig, input: Option<&Path>, flags: PartialOptions) -> Result<()> {
    let text = read_input(input)?;
    let options = resolve_options(config, flags);
    write_output(&transform::strip_common_indentation(&text, &options))
}

// ---------------------------------------------------------------------------
// outdent collapse
// ---------------------------------------------------------------------------

/// Collapse blank lines and print the result.
pub fn run_collapse(
    config: &OutdentConfig,
    input: Option<&Path>,
    max_empty_lines: Option<i64>,
) -> Result<()> {
    let text = read_input(input)?;
    let max = collapse_limit(config, max_empty_lines);
    write_output(&transform::collapse_blank_lines(&text, max))
}

/// Flag, else configured limit, else the built-in default; clamped.
fn collapse_limit(config: &OutdentConfig, flag: Option<i64>) -> usize {
    let raw = flag
        .or(config.outdent.max_empty_lines)
        .unwrap_or(DEFAULT_COLLAPSE_LIMIT);
    crate::options::clamp_max_empty_lines(raw)
}

// ---------------------------------------------------------------------------
// outdent inspect
// ---------------------------------------------------------------------------

/// Show the measurements for a text.
pub fn run_inspect(
    config: &OutdentConfig,
    input: Option<&Path>,
    flags: PartialOptions,
    format: OutputFormat,
) -> Result<()> {
    let text = read_input(input)?;
    let options = resolve_options(config, flags);
    let report = transform::analyze(&text, &options);

    match format {
        OutputFormat::Json => print_report_json(&report, &options)?,
        OutputFormat::Table => print_report_table(&report, &options),
    }

    Ok(())
}

fn print_report_json(report: &IndentReport, options: &Options) -> Result<()> {
    let value = serde_json::json!({
        "options": options,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_report_table(report: &IndentReport, options: &Options) {
    println!("{}", "Indentation Report".bold().cyan());
    println!("{}", "=".repeat(50));
    println!("  {} {}", "Lines:          ".bold(), report.line_count);
    println!(
        "  {} {}..{} ({} constraining)",
        "Eligible window:".bold(),
        report.window_start,
        report.window_end,
        report.constraining_lines
    );

    let profile = &report.profile;
    println!(
        "  {} {} spaces, {} tabs",
        "Leading ws:     ".bold(),
        profile.spaces,
        profile.tabs
    );
    let style = if profile.is_mixed {
        format!("{} (mixed, tab width {})", profile.dominant, options.tab_width())
            .yellow()
            .to_string()
    } else {
        profile.dominant.to_string()
    };
    println!("  {} {}", "Dominant style: ".bold(), style);

    let removable = report.removable.to_string();
    let removable = if report.removable == 0 {
        removable.dimmed()
    } else {
        removable.green()
    };
    println!("  {} {}", "Removable:      ".bold(), removable);
    println!();
    println!(
        "  {}",
        format!(
            "ignore_head={} ignore_tail={} max_empty_lines={}",
            options.ignore_head(),
            options.ignore_tail(),
            options
                .max_empty_lines()
                .map_or_else(|| "off".to_string(), |n| n.to_string())
        )
        .dimmed()
    );
}

// ---------------------------------------------------------------------------
// outdent config show | init | set | reset
// ---------------------------------------------------------------------------

/// Show the effective (merged) configuration as TOML.
pub fn run_config_show() -> Result<()> {
    let toml_str = config::show_effective_config()?;
    println!("{}", "Effective outdent Configuration".bold().cyan());
    println!("{}", "=".repeat(50));
    println!();
    println!("{toml_str}");

    let global_exists = config::global_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    let project_exists = config::project_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);
    println!("{}", "Sources (highest priority last):".dimmed());
    println!("  {} built-in defaults", "·".dimmed());
    print_source("~/.outdent/config.toml", global_exists);
    print_source(".outdent.toml", project_exists);
    println!(
        "  {} {}",
        "·".dimmed(),
        "OUTDENT_* environment variables".dimmed()
    );

    Ok(())
}

fn print_source(name: &str, exists: bool) {
    if exists {
        println!("  {} {}", "✓".green(), name.dimmed());
    } else {
        println!("  {} {}", "·".dimmed(), format!("{name} (not found)").dimmed());
    }
}

/// Initialize a default config file at `~/.outdent/config.toml`.
pub fn run_config_init(force: bool) -> Result<()> {
    let path = config::init_config(force)?;
    println!(
        "{} Config written to {}",
        "✓".green().bold(),
        path.display()
    );
    Ok(())
}

/// Set a single configuration value in the global config file.
pub fn run_config_set(key: &str, value: &str) -> Result<()> {
    let path = config::set_config_value(key, value)?;
    println!(
        "{} Set {} = {} in {}",
        "✓".green().bold(),
        key.bold(),
        value,
        path.display()
    );
    Ok(())
}

/// Reset configuration to defaults.
pub fn run_config_reset() -> Result<()> {
    let path = config::reset_config()?;
    println!(
        "{} Config reset to defaults at {}",
        "✓".green().bold(),
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
