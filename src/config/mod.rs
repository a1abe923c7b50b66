/// Configuration system for outdent.
///
/// Provides a layered configuration hierarchy:
///
/// 1. **Built-in defaults** — applied by [`crate::options::PartialOptions::validate`]
/// 2. **User global config** — `~/.outdent/config.toml`
/// 3. **Project local config** — `.outdent.toml` in the current working directory
/// 4. **Environment variables** — `OUTDENT_*` overrides
///
/// Command-line flags are layered on top by the CLI. Later layers override
/// earlier ones at the field level.
///
/// # Usage
///
/// ```rust,ignore
/// use outdent::config;
///
/// let cfg = config::load();
/// let text = outdent::strip_common_indentation(&input, &cfg.options());
/// ```
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

pub use schema::{EffectiveConfig, OutdentConfig};

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the fully resolved configuration.
///
/// Merges: global TOML → project TOML → env vars. Missing or malformed files
/// are skipped.
pub fn load() -> OutdentConfig {
    let mut config = OutdentConfig::default();

    if let Some(global) = global_config_path().and_then(|p| load_toml_file(&p)) {
        config = config.merge(global);
    }

    if let Some(project) = project_config_path().and_then(|p| load_toml_file(&p)) {
        config = config.merge(project);
    }

    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Load a TOML config file, if it exists and parses.
fn load_toml_file(path: &Path) -> Option<OutdentConfig> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("ignoring malformed config {}: {err}", path.display());
            None
        }
    }
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

/// Path to the user global config: `~/.outdent/config.toml`.
fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".outdent").join("config.toml"))
}

/// Path to the project local config: `.outdent.toml` in the current directory.
fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(".outdent.toml"))
}

/// Return the path to the global config file for display/init purposes.
pub fn global_config_file() -> Option<PathBuf> {
    global_config_path()
}

/// Return the path to the project config file for display purposes.
pub fn project_config_file() -> Option<PathBuf> {
    project_config_path()
}

// ---------------------------------------------------------------------------
// Environment variable overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides (highest file-independent layer).
///
/// Supported variables:
/// - `OUTDENT_IGNORE_HEAD`, `OUTDENT_IGNORE_TAIL`, `OUTDENT_TAB_WIDTH`,
///   `OUTDENT_MAX_EMPTY_LINES` — integers; unparseable values are ignored
/// - `OUTDENT_LOG` — log filter
///
/// `lookup` abstracts `std::env::var` so tests don't touch the process
/// environment.
fn apply_env_overrides(
    mut config: OutdentConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> OutdentConfig {
    let int = |name: &str| lookup(name).and_then(|val| val.trim().parse::<i64>().ok());

    let options = &mut config.outdent;
    if let Some(n) = int("OUTDENT_IGNORE_HEAD") {
        options.ignore_head = Some(n);
    }
    if let Some(n) = int("OUTDENT_IGNORE_TAIL") {
        options.ignore_tail = Some(n);
    }
    if let Some(n) = int("OUTDENT_TAB_WIDTH") {
        options.tab_width = Some(n);
    }
    if let Some(n) = int("OUTDENT_MAX_EMPTY_LINES") {
        options.max_empty_lines = Some(n);
    }

    if let Some(level) = lookup("OUTDENT_LOG")
        && !level.is_empty()
    {
        config.logging.level = Some(level);
    }

    config
}

// ---------------------------------------------------------------------------
// Config init / set / reset
// ---------------------------------------------------------------------------

/// Keys accepted by `outdent config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "outdent.ignore_head",
    "outdent.ignore_tail",
    "outdent.tab_width",
    "outdent.max_empty_lines",
    "logging.level",
];

/// Write the default annotated config to `~/.outdent/config.toml`.
///
/// Creates the `~/.outdent/` directory if it doesn't exist. Returns an error
/// if the file already exists (use `force = true` to overwrite).
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = global_config_path().context("could not determine home directory")?;

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create ~/.outdent/ directory")?;
    }

    fs::write(&path, OutdentConfig::default_toml()).context("failed to write config file")?;

    Ok(path)
}

/// Set a single config key to a value in the global config file.
///
/// Supports the dotted keys listed in [`KNOWN_KEYS`].
pub fn set_config_value(key: &str, value: &str) -> Result<PathBuf> {
    let path = global_config_path().context("could not determine home directory")?;

    let content = if path.exists() {
        fs::read_to_string(&path).context("failed to read config file")?
    } else {
        OutdentConfig::default_toml()
    };

    let mut root: toml::Value =
        toml::from_str(&content).context("failed to parse config as TOML value")?;
    set_toml_value(&mut root, key, value)?;

    let output = toml::to_string_pretty(&root).context("failed to serialize updated config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }
    fs::write(&path, output).context("failed to write config file")?;

    Ok(path)
}

/// Set a value in a TOML value tree using a dotted key path.
///
/// Missing sections are created. Option keys take integers, `logging.level`
/// takes a string.
fn set_toml_value(root: &mut toml::Value, key: &str, raw_value: &str) -> Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        anyhow::bail!(
            "unknown config key '{key}' (expected one of: {})",
            KNOWN_KEYS.join(", ")
        );
    }

    let Some((section, leaf)) = key.split_once('.') else {
        anyhow::bail!("config key must be 'section.name', got '{key}'");
    };

    let new_value = if section == "logging" {
        toml::Value::String(raw_value.to_string())
    } else {
        let n: i64 = raw_value
            .trim()
            .parse()
            .with_context(|| format!("expected integer for '{key}', got '{raw_value}'"))?;
        toml::Value::Integer(n)
    };

    let table = root
        .as_table_mut()
        .context("config root is not a table")?
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::map::Map::new()))
        .as_table_mut()
        .with_context(|| format!("expected table at '{section}'"))?;

    table.insert(leaf.to_string(), new_value);
    Ok(())
}

/// Reset the global config to defaults (overwrite the file).
pub fn reset_config() -> Result<PathBuf> {
    init_config(true)
}

/// Show the effective (fully resolved) config as TOML.
pub fn show_effective_config() -> Result<String> {
    let config = load();
    toml::to_string_pretty(&EffectiveConfig::from(&config))
        .context("failed to serialize effective config")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
