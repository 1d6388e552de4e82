//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.healmate/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_ASSISTANT_NAME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct HealMateConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub assistant_name: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PanelConfig {
    pub width_percent: Option<u16>,
    pub height_percent: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "healmate.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_PANEL_WIDTH_PERCENT: u16 = 45;
pub const DEFAULT_PANEL_HEIGHT_PERCENT: u16 = 70;
/// Panel percentages are clamped into this range.
pub const MIN_PANEL_PERCENT: u16 = 20;
pub const MAX_PANEL_PERCENT: u16 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub assistant_name: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub panel_width_percent: u16,
    pub panel_height_percent: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            panel_width_percent: DEFAULT_PANEL_WIDTH_PERCENT,
            panel_height_percent: DEFAULT_PANEL_HEIGHT_PERCENT,
        }
    }
}

/// Values passed on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.healmate/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".healmate").join("config.toml"))
}

/// Outcome of reading `~/.healmate/config.toml`.
///
/// Reading neither logs nor writes anything. The caller starts the logger
/// from [`ConfigLoad::config`], then calls [`ConfigLoad::finish`] to report
/// what happened and generate the default file if it was missing.
#[derive(Debug)]
pub enum ConfigLoad {
    Loaded { path: PathBuf, config: HealMateConfig },
    Missing { path: PathBuf },
    NoHomeDir,
    Failed { path: PathBuf, error: ConfigError },
}

impl ConfigLoad {
    /// The file's settings, or defaults when there are none to use.
    pub fn config(&self) -> HealMateConfig {
        match self {
            ConfigLoad::Loaded { config, .. } => config.clone(),
            _ => HealMateConfig::default(),
        }
    }

    pub fn finish(self) {
        match self {
            ConfigLoad::Loaded { path, config } => {
                info!("Loaded config from {}", path.display());
                debug!("Config: {:?}", config);
            }
            ConfigLoad::Missing { path } => {
                info!("No config file found, generating default at {}", path.display());
                generate_default_config(&path);
            }
            ConfigLoad::NoHomeDir => {
                warn!("Could not determine home directory, using default config");
            }
            ConfigLoad::Failed { path, error } => {
                warn!("Ignoring {} ({}), using default config", path.display(), error);
            }
        }
    }
}

/// Read `~/.healmate/config.toml`.
pub fn read_config() -> ConfigLoad {
    read_config_at(config_path())
}

/// Read the config at `path`; `None` means the home directory is unknown.
pub fn read_config_at(path: Option<PathBuf>) -> ConfigLoad {
    let Some(path) = path else {
        return ConfigLoad::NoHomeDir;
    };
    if !path.exists() {
        return ConfigLoad::Missing { path };
    }
    match load_config_from(&path) {
        Ok(config) => ConfigLoad::Loaded { path, config },
        Err(error) => ConfigLoad::Failed { path, error },
    }
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<HealMateConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# HealMate Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# assistant_name = "HealMate"        # Or set HEALMATE_ASSISTANT_NAME
# log_file = "healmate.log"          # Or HEALMATE_LOG_FILE / --log-file
# log_level = "debug"                # off, error, warn, info, debug, trace

# [panel]
# width_percent = 45                 # 20..=100
# height_percent = 70                # 20..=100
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HealMateConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env<F>(config: &HealMateConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Assistant name: env → config → default
    let assistant_name = env("HEALMATE_ASSISTANT_NAME")
        .or_else(|| config.general.assistant_name.clone())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string());

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("HEALMATE_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default; unknown names fall through
    let log_level = [
        cli.log_level.clone(),
        env("HEALMATE_LOG_LEVEL"),
        config.general.log_level.clone(),
    ]
    .into_iter()
    .flatten()
    .find_map(|name| {
        let parsed = parse_level(&name);
        if parsed.is_none() {
            warn!("Ignoring unknown log level '{}'", name);
        }
        parsed
    })
    .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        assistant_name,
        log_file,
        log_level,
        panel_width_percent: clamp_percent(
            config.panel.width_percent.unwrap_or(DEFAULT_PANEL_WIDTH_PERCENT),
        ),
        panel_height_percent: clamp_percent(
            config.panel.height_percent.unwrap_or(DEFAULT_PANEL_HEIGHT_PERCENT),
        ),
    }
}

fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn clamp_percent(value: u16) -> u16 {
    value.clamp(MIN_PANEL_PERCENT, MAX_PANEL_PERCENT)
}
