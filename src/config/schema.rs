/// Configuration schema for outdent.
///
/// Defines the TOML-serializable structure with two sections: `[outdent]`
/// (transformation options) and `[logging]`.
///
/// Every field is optional. Unset option fields fall back to the built-in
/// defaults during validation, so a file only needs the values it overrides.
use serde::{Deserialize, Serialize};

use crate::options::{Options, PartialOptions};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// One configuration layer, or the merge of several.
///
/// Maps directly to `~/.outdent/config.toml` and `.outdent.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdentConfig {
    pub outdent: PartialOptions,
    pub logging: LoggingConfig,
}

impl OutdentConfig {
    /// Layer `overlay` on top of `self` at field level.
    pub fn merge(self, overlay: OutdentConfig) -> Self {
        Self {
            outdent: self.outdent.merge(overlay.outdent),
            logging: LoggingConfig {
                level: overlay.logging.level.or(self.logging.level),
            },
        }
    }

    /// Validated transformation options.
    pub fn options(&self) -> Options {
        self.outdent.validate()
    }

    /// Effective log filter.
    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// ---------------------------------------------------------------------------
// [logging]
// ---------------------------------------------------------------------------

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// ---------------------------------------------------------------------------
// Effective view
// ---------------------------------------------------------------------------

/// Fully resolved configuration, as shown by `outdent config show`.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub outdent: Options,
    pub logging: EffectiveLogging,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveLogging {
    pub level: String,
}

impl From<&OutdentConfig> for EffectiveConfig {
    fn from(config: &OutdentConfig) -> Self {
        Self {
            outdent: config.options(),
            logging: EffectiveLogging {
                level: config.log_level().to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Default config file
// ---------------------------------------------------------------------------

impl OutdentConfig {
    /// Annotated default configuration, written by `outdent config init`.
    pub fn default_toml() -> String {
        r#"# outdent configuration
#
# Layers (later wins): built-in defaults, ~/.outdent/config.toml,
# ./.outdent.toml, OUTDENT_* environment variables, command-line flags.

[outdent]
# Lines at the start left out when measuring the shared indent (0-4).
ignore_head = 1
# Lines at the end left out when measuring the shared indent (0-4).
ignore_tail = 0
# Width of a tab when spaces and tabs are mixed (1-8).
tab_width = 4
# Collapse runs of blank lines to at most this many (0-50).
# Leave unset to keep blank lines as they are.
# max_empty_lines = 1

[logging]
# error, warn, info, debug or trace
level = "warn"
"#
        .to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
