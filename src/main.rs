use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use outdent::options::PartialOptions;
use outdent::{cli, config, request};

#[derive(Debug, Parser)]
#[command(name = "outdent")]
#[command(about = "Remove the indentation shared by the lines of a text")]
struct App {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Remove shared leading whitespace and print the result
    Strip {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        #[command(flatten)]
        options: OptionFlags,
    },
    /// Limit runs of blank lines and print the result
    Collapse {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Maximum consecutive blank lines to keep (0-50)
        #[arg(long, allow_negative_numbers = true)]
        max_empty_lines: Option<i64>,
    },
    /// Show line counts, whitespace profile and removable indent
    Inspect {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        #[command(flatten)]
        options: OptionFlags,
        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Read a JSON request from stdin and write a JSON response
    Request,
    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default config to ~/.outdent/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Set one key, e.g. `outdent config set outdent.tab_width 2`
    Set { key: String, value: String },
    /// Overwrite ~/.outdent/config.toml with the defaults
    Reset,
}

/// Option overrides shared by `strip` and `inspect`. Out-of-range values are
/// clamped, not rejected.
#[derive(Debug, Args)]
struct OptionFlags {
    /// Lines at the start left out of the indent measurement (0-4)
    #[arg(long, allow_negative_numbers = true)]
    ignore_head: Option<i64>,
    /// Lines at the end left out of the indent measurement (0-4)
    #[arg(long, allow_negative_numbers = true)]
    ignore_tail: Option<i64>,
    /// Tab width used when spaces and tabs are mixed (1-8)
    #[arg(long, allow_negative_numbers = true)]
    tab_width: Option<i64>,
    /// Collapse blank-line runs to at most this many first (0-50)
    #[arg(long, allow_negative_numbers = true)]
    max_empty_lines: Option<i64>,
}

impl From<OptionFlags> for PartialOptions {
    fn from(flags: OptionFlags) -> Self {
        Self {
            max_empty_lines: flags.max_empty_lines,
            ignore_head: flags.ignore_head,
            ignore_tail: flags.ignore_tail,
            tab_width: flags.tab_width,
        }
    }
}

fn main() -> Result<()> {
    let app = App::parse();
    let cfg = config::load();

    env_logger::Builder::new()
        .parse_filters(cfg.log_level())
        .init();

    match app.command {
        Commands::Strip { file, options } => cli::run_strip(&cfg, file.as_deref(), options.into()),
        Commands::Collapse {
            file,
            max_empty_lines,
        } => cli::run_collapse(&cfg, file.as_deref(), max_empty_lines),
        Commands::Inspect {
            file,
            options,
            format,
        } => {
            let fmt = cli::OutputFormat::from_str_opt(Some(&format));
            cli::run_inspect(&cfg, file.as_deref(), options.into(), fmt)
        }
        Commands::Request => request::run(),
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(),
            ConfigAction::Init { force } => cli::run_config_init(force),
            ConfigAction::Set { key, value } => cli::run_config_set(&key, &value),
            ConfigAction::Reset => cli::run_config_reset(),
        },
    }
}
