//! TOML configuration schema types for the ChurchAfrica dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`. This file configures the *application* (tick
//! rate, log output, state-file location); the dashboard layout itself is
//! user state and lives in the JSON state file, not here.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"1s"`)
//! parsed by the `humantime` crate at the call site.

use serde::{Deserialize, Serialize};

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [tui]
/// [storage]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TUI appearance and behavior settings.
    pub tui: TuiConfig,
    /// Dashboard state persistence settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// TUI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration.
    /// Controls how often the TUI redraws when idle.
    /// Default: `"250ms"`.
    pub tick_rate: String,
    /// Whether the first-run tour overlay is enabled at all.
    /// Once dismissed, the tour stays hidden regardless of this flag.
    pub tour: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            tour: true,
        }
    }
}

/// Dashboard state persistence configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the dashboard state file. Empty string means the default
    /// location, `$XDG_DATA_HOME/churchafrica-dashboard/state.json`.
    /// Tilde (~) is expanded to the user's home directory.
    pub state_file: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity level.
    pub level: LogLevel,
    /// Path to log file. Empty string means log to stderr.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Logging verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// General operational information.
    Info,
    /// Detailed debugging information.
    Debug,
    /// Very verbose, includes all internal operations.
    Trace,
}

impl LogLevel {
    /// Filter directive string accepted by `tracing_subscriber::EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_rate_is_250ms() {
        let config = Config::default();
        assert_eq!(config.tui.tick_rate, "250ms");
        assert!(humantime::parse_duration(&config.tui.tick_rate).is_ok());
    }

    #[test]
    fn default_tour_is_enabled() {
        assert!(Config::default().tui.tour);
    }

    #[test]
    fn default_state_file_is_empty() {
        assert_eq!(Config::default().storage.state_file, "");
    }

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(Config::default().log.level, LogLevel::Info);
        assert_eq!(Config::default().log.file, "");
    }

    #[test]
    fn log_level_round_trips_through_toml() {
        for (level, text) in [
            (LogLevel::Error, "error"),
            (LogLevel::Warn, "warn"),
            (LogLevel::Info, "info"),
            (LogLevel::Debug, "debug"),
            (LogLevel::Trace, "trace"),
        ] {
            let toml_str = format!("[log]\nlevel = \"{text}\"\n");
            let config: Config = toml::from_str(&toml_str).expect("level should parse");
            assert_eq!(config.log.level, level);
            assert_eq!(level.as_str(), text);
        }
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[log]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config =
            toml::from_str("[tui]\ntick_rate = \"100ms\"\n").expect("partial should parse");
        assert_eq!(config.tui.tick_rate, "100ms");
        assert!(config.tui.tour);
        assert_eq!(config.log.level, LogLevel::Info);
    }
}
