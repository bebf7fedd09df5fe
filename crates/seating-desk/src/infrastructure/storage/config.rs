//! TOML-based configuration for the seating desk.
//!
//! The file lives in the platform-appropriate config directory unless a path
//! is given explicitly:
//! - Windows:  `%APPDATA%\ExamSeating\config.toml`
//! - Linux:    `~/.config/exam-seating/config.toml`
//! - macOS:    `~/Library/Application Support/ExamSeating/config.toml`
//!
//! ```toml
//! [arrangement]
//! total_seats = 50
//! domain_cap = 3
//!
//! [desk]
//! title = "Exam Seating Arrangement System"
//! log_level = "info"
//! ```
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a 50-seat hall with a cap of 3 per domain.

use std::path::{Path, PathBuf};

use seating_core::SeatNumber;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub arrangement: ArrangementConfig,
    #[serde(default)]
    pub desk: DeskConfig,
}

/// Size of the hall and the per-domain cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArrangementConfig {
    /// Number of seats, numbered from 1.
    #[serde(default = "default_total_seats")]
    pub total_seats: SeatNumber,
    /// Maximum seats one domain may hold at the same time.
    #[serde(default = "default_domain_cap")]
    pub domain_cap: u32,
}

/// Presentation and logging settings for the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeskConfig {
    /// Title shown at the top of the form.
    #[serde(default = "default_title")]
    pub title: String,
    /// `tracing` filter: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`,
    /// or a full `EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_total_seats() -> SeatNumber {
    50
}
fn default_domain_cap() -> u32 {
    3
}
fn default_title() -> String {
    "Exam Seating Arrangement System".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            total_seats: default_total_seats(),
            domain_cap: default_domain_cap(),
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Checks that the arrangement values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `total_seats` is not positive or
    /// `domain_cap` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arrangement.total_seats <= 0 {
            return Err(ConfigError::Invalid {
                field: "arrangement.total_seats",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.arrangement.domain_cap == 0 {
            return Err(ConfigError::Invalid {
                field: "arrangement.domain_cap",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// The loaded values are not validated here; call [`AppConfig::validate`]
/// after applying any overrides.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Loads `AppConfig` from the platform config file.
///
/// # Errors
///
/// See [`config_file_path`] and [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config directory, including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ExamSeating"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("exam-seating"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ExamSeating")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
