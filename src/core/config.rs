//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bridgelearn/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolving happen before the file logger exists (the log file
//! and level are config values), so both collect `ConfigNote`s instead of
//! logging. `main` replays them once the logger is installed.

use log::Level;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::routes::{RouteEntry, RouteTable};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "bridgelearn.log";

pub const CATALOG_ENV: &str = "BRIDGELEARN_CATALOG";
pub const LOG_LEVEL_ENV: &str = "BRIDGELEARN_LOG_LEVEL";

// ============================================================================
// Startup Notes
// ============================================================================

/// A message produced before logging is up, replayed later with `log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Emit through the `log` facade.
    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

// ============================================================================
// Loaded / Resolved Config
// ============================================================================

/// A parsed config file plus what happened while finding it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: BridgeConfig,
    pub notes: Vec<ConfigNote>,
}

/// Env var layer, read once so resolution itself stays pure.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub catalog: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            catalog: std::env::var(CATALOG_ENV).ok(),
            log_level: std::env::var(LOG_LEVEL_ENV).ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub routes: RouteTable,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.bridgelearn/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bridgelearn"))
}

/// Returns the path to `~/.bridgelearn/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from the default location.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BridgeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_or_generate(&path),
        None => Ok(LoadedConfig {
            config: BridgeConfig::default(),
            notes: vec![ConfigNote::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        }),
    }
}

/// Load config from an explicit path (`--config`). A missing file is an
/// error here; nothing is generated.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: BridgeConfig = toml::from_str(&contents)?;
    let notes = vec![
        ConfigNote::new(Level::Info, format!("Loaded config from {}", path.display())),
        ConfigNote::new(Level::Debug, format!("Config: {:?}", config)),
    ];
    Ok(LoadedConfig { config, notes })
}

fn load_or_generate(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return load_config_from(path);
    }

    let mut notes = vec![ConfigNote::new(
        Level::Info,
        format!("No config file found, generating default at {}", path.display()),
    )];
    if let Err(e) = generate_default_config(path) {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to write default config: {}", e),
        ));
    }
    Ok(LoadedConfig {
        config: BridgeConfig::default(),
        notes,
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# BridgeLearn Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "catalog.json"      # Relative paths resolve against ~/.bridgelearn/
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "bridgelearn.log"

# Content that opens its own screen when activated.
# Match on content_id or on kind; id matches win.

# [[routes]]
# content_id = "1"
# destination = "Interactive"

# [[routes]]
# kind = "SIMULATION"
# destination = "Interactive"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_catalog` comes from `--catalog` (None = not specified).
pub fn resolve(config: &BridgeConfig, cli_catalog: Option<&Path>) -> ResolvedConfig {
    resolve_with_env(config, cli_catalog, &EnvOverrides::from_env())
}

/// `resolve` with the env layer passed in.
pub fn resolve_with_env(
    config: &BridgeConfig,
    cli_catalog: Option<&Path>,
    env: &EnvOverrides,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Catalog: CLI → env → config → built-in
    let catalog_path = cli_catalog
        .map(Path::to_path_buf)
        .or_else(|| env.catalog.as_deref().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .catalog_file
                .as_deref()
                .map(resolve_relative_to_config_dir)
        });

    // Log level: env → config → default. An unparseable layer falls through.
    let env_level = env
        .log_level
        .as_deref()
        .and_then(|level| parse_log_level(level, LOG_LEVEL_ENV, &mut notes));
    let log_level = match env_level {
        Some(level) => level,
        None => config
            .general
            .log_level
            .as_deref()
            .and_then(|level| parse_log_level(level, "general.log_level", &mut notes))
            .unwrap_or(DEFAULT_LOG_LEVEL),
    };

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let routes = resolve_routes(&config.routes, &mut notes);

    ResolvedConfig {
        catalog_path,
        log_level,
        log_file,
        routes,
        notes,
    }
}

/// Config routes replace the defaults entirely; no entries keeps the defaults.
fn resolve_routes(entries: &[RouteEntry], notes: &mut Vec<ConfigNote>) -> RouteTable {
    if entries.is_empty() {
        return RouteTable::default();
    }
    let (table, skipped) = RouteTable::from_entries(entries);
    for entry in skipped {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!(
                "Route to {} has neither content_id nor kind, skipping",
                entry.destination
            ),
        ));
    }
    table
}

fn parse_log_level(level: &str, source: &str, notes: &mut Vec<ConfigNote>) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Unknown log level {:?} in {}, ignoring", level, source),
            ));
            None
        }
    }
}

fn resolve_relative_to_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
