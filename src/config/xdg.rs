//! Platform-aware path resolution for churchafrica-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/churchafrica-dashboard` or `~/.config/churchafrica-dashboard`
//! - Data/state: `$XDG_DATA_HOME/churchafrica-dashboard` or `~/.local/share/churchafrica-dashboard`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/...` or `~/Library/Application Support/churchafrica-dashboard`
//! - Data/state: `$XDG_DATA_HOME/...` or `~/Library/Application Support/churchafrica-dashboard`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "churchafrica-dashboard";

/// Returns the configuration directory for churchafrica-dashboard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/churchafrica-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/churchafrica-dashboard`
///    - macOS: `~/Library/Application Support/churchafrica-dashboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory for persisted dashboard state.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/churchafrica-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.local/share/churchafrica-dashboard`
///    - macOS: `~/Library/Application Support/churchafrica-dashboard`
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

/// Platform-native data base directory (without XDG override).
fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().expect("could not determine data directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".local/share")
    }
}

/// Returns the path to the dashboard state file.
///
/// Resolves to `data_dir()/state.json`.
pub fn state_path() -> PathBuf {
    data_dir().join("state.json")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().expect("could not determine home directory");
        home.join(rest)
    } else if path == "~" {
        dirs::home_dir().expect("could not determine home directory")
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Creates the configuration directory if it does not exist, returning its path.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}
