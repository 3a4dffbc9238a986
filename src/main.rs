//! ChurchAfrica Dashboard - CLI entry point
//!
//! This binary provides the command-line interface for the ChurchAfrica
//! KPI dashboard: the `tui` subcommand runs the dashboard itself, and the
//! remaining subcommands inspect the card catalog, the persisted layout,
//! and the configuration file without entering the TUI.

use churchafrica_dashboard::config::schema::{Config, LogConfig};
use churchafrica_dashboard::config::{xdg, ConfigError, ConfigLoader};
use churchafrica_dashboard::registry::CardRegistry;
use churchafrica_dashboard::store::{ConfigStore, FileStorage, MemoryStorage, StorageBackend};
use churchafrica_dashboard::tui::app::App;
use churchafrica_dashboard::DashboardConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

mod commands;

/// ChurchAfrica KPI dashboard
#[derive(Parser)]
#[command(name = "cad")]
#[command(version, about = "ChurchAfrica KPI dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cad CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard terminal user interface
    Tui {
        /// Path to the dashboard state file (overrides config)
        #[arg(long)]
        state_file: Option<PathBuf>,

        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the KPI card catalog
    Cards {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Inspect or reset the persisted dashboard layout
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `layout` subcommand.
#[derive(Subcommand)]
enum LayoutAction {
    /// Print the persisted layout as JSON
    Show {
        /// Path to the dashboard state file
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
    /// Reset the layout to the starter configuration
    Reset {
        /// Path to the dashboard state file
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// Validate this file instead of the default location
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { state_file, config } => run_tui(state_file, config),
        Commands::Cards { format } => commands::run_cards_command(&format),
        Commands::Layout { action } => match action {
            LayoutAction::Show { state_file } => commands::run_layout_show_command(state_file),
            LayoutAction::Reset { state_file } => commands::run_layout_reset_command(state_file),
        },
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::run_config_init_command(force),
            ConfigAction::Path => commands::run_config_path_command(),
            ConfigAction::Validate { file } => commands::run_config_validate_command(file),
        },
    }
}

/// Loads config, opens storage, and runs the TUI on a tokio runtime.
fn run_tui(state_file: Option<PathBuf>, config_path: Option<PathBuf>) -> ExitCode {
    let app_config = match load_app_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&app_config.log);

    let backend = open_backend(state_file, &app_config);
    let store = ConfigStore::open(backend, DashboardConfig::default());
    let registry = CardRegistry::builtin();
    let tick_rate = parse_tick_rate(&app_config.tui.tick_rate);
    let tour_enabled = app_config.tui.tour;

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
    let result = rt.block_on(async {
        let mut app = App::new(store, registry, tick_rate, tour_enabled);
        app.run().await
    });
    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Loads the TOML config from an explicit path or the XDG default.
fn load_app_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => ConfigLoader::load_from_path(p),
        None => ConfigLoader::load_default(),
    }
}

/// Opens durable storage, degrading to in-memory when unavailable.
///
/// Precedence for the state file: `--state-file` flag, then the
/// `[storage] state_file` config entry, then the XDG default.
fn open_backend(state_file: Option<PathBuf>, app_config: &Config) -> Box<dyn StorageBackend> {
    let path = state_file.or_else(|| {
        let configured = app_config.storage.state_file.trim();
        (!configured.is_empty()).then(|| xdg::expand_tilde(configured))
    });
    let opened = match path {
        Some(p) => FileStorage::open(p),
        None => FileStorage::open_default(),
    };
    match opened {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("durable storage unavailable, dashboard changes will not persist: {e}");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Parses `tui.tick_rate`, falling back to 250ms on bad input.
fn parse_tick_rate(raw: &str) -> Duration {
    humantime::parse_duration(raw).unwrap_or_else(|e| {
        tracing::warn!("invalid tui.tick_rate {raw:?}, using 250ms: {e}");
        Duration::from_millis(250)
    })
}

/// Initialize the tracing subscriber.
///
/// Reads the `CAD_LOG` environment variable for filter directives,
/// falling back to the `[log] level` config value. Output goes to the
/// configured log file, or stderr when none is set.
fn init_logging(log: &LogConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let make_filter =
        || EnvFilter::try_from_env("CAD_LOG").unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    if log.file.is_empty() {
        fmt()
            .with_env_filter(make_filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let path = xdg::expand_tilde(&log.file);
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => fmt()
            .with_env_filter(make_filter())
            .with_target(false)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {e}; logging to stderr",
                path.display()
            );
            fmt()
                .with_env_filter(make_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify the CLI configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_cad_requires_subcommand() {
        let result = Cli::try_parse_from(["cad"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cards_default_format_is_table() {
        let cli = Cli::try_parse_from(["cad", "cards"]).expect("should parse");
        match cli.command {
            Commands::Cards { format } => assert_eq!(format, "table"),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_cards_json_format() {
        let cli =
            Cli::try_parse_from(["cad", "cards", "--format", "json"]).expect("should parse");
        match cli.command {
            Commands::Cards { format } => assert_eq!(format, "json"),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_tui_without_flags() {
        let cli = Cli::try_parse_from(["cad", "tui"]).expect("should parse");
        match cli.command {
            Commands::Tui { state_file, config } => {
                assert!(state_file.is_none());
                assert!(config.is_none());
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_tui_custom_state_file() {
        let cli = Cli::try_parse_from(["cad", "tui", "--state-file", "/custom/state.json"])
            .expect("should parse");
        match cli.command {
            Commands::Tui { state_file, .. } => {
                assert_eq!(state_file, Some(PathBuf::from("/custom/state.json")));
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_layout_without_subcommand_fails() {
        let result = Cli::try_parse_from(["cad", "layout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_show_state_file() {
        let cli = Cli::try_parse_from(["cad", "layout", "show", "--state-file", "/tmp/s.json"])
            .expect("should parse");
        match cli.command {
            Commands::Layout {
                action: LayoutAction::Show { state_file },
            } => assert_eq!(state_file, Some(PathBuf::from("/tmp/s.json"))),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_init_force_flag() {
        let cli = Cli::try_parse_from(["cad", "config", "init", "--force"]).expect("should parse");
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_parse_tick_rate_valid_and_invalid() {
        assert_eq!(parse_tick_rate("100ms"), Duration::from_millis(100));
        assert_eq!(parse_tick_rate("1s"), Duration::from_secs(1));
        assert_eq!(parse_tick_rate("not a duration"), Duration::from_millis(250));
    }
}
